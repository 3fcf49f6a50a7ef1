use anyhow::Result;
use clap::{Parser, Subcommand};

use wasiat_kiosk::cli::{handle_journal_command, JournalCommands};
use wasiat_kiosk::config::{paths::KioskPaths, settings::Settings};
use wasiat_kiosk::journal::JournalLogger;

#[derive(Parser)]
#[command(
    name = "kiosk",
    version,
    about = "Digital Will (Wasiat Digital) registration kiosk",
    long_about = "A terminal kiosk that walks a citizen through the Wasiat Digital \
                  registration flow: MyKad insertion, biometric check, beneficiary \
                  allocation, document upload, executor choice and witness \
                  verification. All hardware is simulated."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the kiosk interface (default)
    #[command(alias = "ui")]
    Tui,

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Inspect the session journal
    #[command(subcommand)]
    Journal(JournalCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = KioskPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            wasiat_kiosk::tui::run_tui(settings, &paths)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Kiosk already initialized at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Initialized kiosk at: {}", paths.base_dir().display());
                println!();
                println!("Edit {} to change the citizen profile.", paths.settings_file().display());
                println!("Run 'kiosk' to launch the kiosk.");
            }
        }
        Some(Commands::Config) => {
            println!("Wasiat Kiosk Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Journal file:   {}", paths.journal_file().display());
            println!();
            println!("Settings:");
            println!("  Agency:          {} ({})", settings.agency_code, settings.agency_title);
            println!("  Citizen:         {}", settings.citizen.name);
            println!("  IC number:       {}", settings.citizen.masked_ic());
            println!("  Journal enabled: {}", settings.journal_enabled);
            println!("  Tick rate:       {} ms", settings.tick_rate_ms);
            println!("  Confirm quit:    {}", settings.confirm_quit);
        }
        Some(Commands::Journal(cmd)) => {
            let logger = JournalLogger::new(paths.journal_file());
            handle_journal_command(&logger, cmd)?;
        }
    }

    Ok(())
}
