use std::io::{self, Write};

use form_forge::app::infrastructure::input::read_command_line;
use form_forge::app::{EngineSettings, PreviewController, SANDBOX_POLICY, Session, Transcript};

const HELP: &str = "Commands: :html  :css  :js  :transcript  :preview  :help  :quit";

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = EngineSettings::load();
    let mut preview = PreviewController::new(settings.write_preview, settings.preview_dir.clone());

    let result = run(&settings, &mut preview);
    // Runs on the error path too
    preview.cleanup();
    result
}

fn run(settings: &EngineSettings, preview: &mut PreviewController) -> io::Result<()> {
    let mut session = Session::from_settings(settings);
    let mut transcript = if settings.greeting_enabled {
        Transcript::with_greeting()
    } else {
        Transcript::new()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(greeting) = transcript.last() {
        writeln!(out, "{}", greeting.content)?;
    }
    writeln!(out, "{}", HELP)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    while let Some(line) = read_command_line(&mut reader)? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            ":quit" | ":q" => break,
            ":help" => writeln!(out, "{}", HELP)?,
            ":html" => writeln!(out, "{}", session.artifacts().markup)?,
            ":css" => writeln!(out, "{}", session.artifacts().stylesheet)?,
            ":js" => writeln!(out, "{}", session.artifacts().script)?,
            ":transcript" => match transcript.to_json() {
                Ok(json) => writeln!(out, "{}", json)?,
                Err(e) => log::error!("Failed to serialize transcript: {}", e),
            },
            ":preview" => {
                if preview.toggle() {
                    writeln!(out, "Preview on (sandbox: {})", SANDBOX_POLICY)?;
                } else {
                    writeln!(out, "Preview off")?;
                }
            }
            command => {
                let reply = session.handle(command, &mut transcript);
                writeln!(out, "{}", reply.response)?;
                match preview.refresh(&reply.artifacts) {
                    Ok(Some(path)) => log::info!("Preview: {}", path.display()),
                    Ok(None) => {}
                    Err(e) => log::warn!("Failed to write preview: {}", e),
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}
