/// Toggles dark mode and saves it right away.
pub fn execute() {
    let mut store = super::preference_store();
    let theme = store.toggle_theme();

    println!("Switched to the {} theme.", theme.name());
    if store.is_dirty() {
        eprintln!("Warning: the theme change could not be saved.");
    }
}
