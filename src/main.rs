use clap::Parser;
use release_notes::{Args, command};

fn initialize_logger(debug: bool) -> release_notes::Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_notes")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    command::execute(&args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use release_notes::ReleaseNotesError;

    use super::*;

    #[test]
    fn logger_can_only_be_initialized_once() {
        let _ = initialize_logger(false);

        let result = initialize_logger(true);

        assert!(matches!(result, Err(ReleaseNotesError::LoggerError(_))));
    }
}
