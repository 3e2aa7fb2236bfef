use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio::sync::mpsc;

use telechat::service::StubService;
use telechat::ui::ChatApp;
use telechat::{config, store};

#[derive(Parser)]
#[command(name = "telechat", version, about = "TeleChat messenger UI demo")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Print the built-in seed data as JSON (a fixtures-file template)
    Fixtures,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    if cli.mode == Some(Mode::Fixtures) {
        print_fixtures();
        return Ok(());
    }

    let app_config = config::load_config(&cli.config);
    let chat_store = store::load_or_seed(&app_config);

    // UI -> service
    let (command_sender, command_receiver) = mpsc::channel(100);
    // Service -> UI
    let (event_sender, event_receiver) = mpsc::channel(100);

    tokio::spawn(async move {
        StubService::new(event_sender, command_receiver).run().await;
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    let story_duration = app_config.story_duration_secs;
    let mut event_receiver = Some(event_receiver);

    eframe::run_native(
        "TeleChat",
        options,
        Box::new(move |_cc| {
            let event_receiver = event_receiver
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!(
                "UI started with {} conversations seeded",
                chat_store.conversations.len()
            );

            Ok(Box::new(ChatApp::new(
                chat_store,
                story_duration,
                command_sender.clone(),
                event_receiver,
            )))
        }),
    )
}

fn print_fixtures() {
    match serde_json::to_string_pretty(&store::seed()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize fixtures: {err}"),
    }
}
