use std::fmt::Display;
use std::io::{self, BufRead, Write};

use resizr_core::{GeometryRequest, Result, Session, directory};

/// Runs the interactive flow: process name, window choice, new geometry.
pub fn execute() {
    super::warn_if_not_elevated();

    let mut session = super::open_session();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let result = run(&mut session, &mut prompter);
    session.close();

    if let Err(e) = result {
        super::fail(e);
    }
}

/// Line-oriented question/answer over any reader and writer.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one trimmed line. EOF reads as blank.
    fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

fn run<R: BufRead, W: Write>(session: &mut Session, p: &mut Prompter<R, W>) -> Result<()> {
    let process = p.ask("Enter process name (e.g., notepad; blank for all): ")?;

    session.refresh()?;
    let windows = session.filtered(&process);
    if windows.is_empty() {
        p.say(format!("No windows found for process: {process}"))?;
        return Ok(());
    }

    p.say(format!("Found {} window(s):", windows.len()))?;
    for (i, entry) in windows.iter().enumerate() {
        p.say(format!(
            "{i}: {} [{} pid {}]",
            entry.title, entry.process_name, entry.pid
        ))?;
    }

    let index = if windows.len() > 1 {
        match p.ask("Enter window index to resize: ")?.parse::<usize>() {
            Ok(i) => i,
            Err(_) => {
                p.say("Invalid index")?;
                return Ok(());
            }
        }
    } else {
        0
    };
    let target = match directory::select(&windows, index) {
        Ok(entry) => entry.handle,
        Err(e) => {
            p.say(format!("Error: {e}"))?;
            return Ok(());
        }
    };

    let current = match session.current_rect(target) {
        Ok(rect) => rect,
        Err(e) => {
            p.say(super::describe_failure(&e))?;
            return Ok(());
        }
    };
    p.say(format!("Current window size: {current}"))?;

    let width = p.ask(&format!("Enter new width (blank keeps {}): ", current.width))?;
    let height = p.ask(&format!("Enter new height (blank keeps {}): ", current.height))?;
    let x = p.ask(&format!("Enter new x (blank keeps {}): ", current.x))?;
    let y = p.ask(&format!("Enter new y (blank keeps {}): ", current.y))?;

    let request = match GeometryRequest::parse(&width, &height, &x, &y) {
        Ok(request) => request,
        Err(e) => {
            p.say(format!("Error: {e}"))?;
            return Ok(());
        }
    };

    match session.apply(target, &request) {
        Ok(rect) => p.say(format!("Window resized successfully to {rect}"))?,
        Err(e) => p.say(super::describe_failure(&e))?,
    }
    Ok(())
}
