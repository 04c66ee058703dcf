use clap::Args;

/// Arguments for the `list` subcommand.
#[derive(Args)]
pub struct ListArgs {
    /// Only show windows whose process name contains this text
    #[arg(long, short)]
    filter: Option<String>,
    /// Match the process name exactly instead (".exe" is optional)
    #[arg(long, requires = "filter")]
    exact: bool,
}

pub fn execute(args: &ListArgs) {
    let mut session = super::open_session();
    if let Err(e) = session.refresh().map(|_| ()) {
        session.close();
        super::fail(e);
    }

    let shown = match args.filter.as_deref() {
        None => session.entries().to_vec(),
        Some(name) if args.exact => session.filtered_exact(name),
        Some(needle) => session.filtered(needle),
    };

    let table = super::table::windows(&shown, session.desktop(), session.theme());
    println!("{table}");
    println!("\n{} windows found", shown.len());
    session.close();
}
