pub fn execute() {
    let store = super::preference_store();
    let prefs = store.get();

    match store.path() {
        Some(path) => println!("Preferences file: {}", path.display()),
        None => println!("Preferences file: (no config directory)"),
    }
    println!("dark_mode = {}", prefs.dark_mode);
    println!("window_width = {}", prefs.window_width);
    println!("window_height = {}", prefs.window_height);
}
