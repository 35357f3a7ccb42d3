use clap::{Parser, Subcommand, ValueEnum};
use folio::animation::{self, Controls, Frame};
use folio::config::SiteConfig;
use folio::contact::{ContactController, ContactForm, EmailJsTransport, Field, SubmitStatus};
use folio::i18n::{Language, LanguageContext, Resolved};
use folio::sequencer::{RandomChallenges, Sequencer};
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LanguageCli {
    En,
    Pl,
}

impl From<LanguageCli> for Language {
    fn from(value: LanguageCli) -> Self {
        match value {
            LanguageCli::En => Language::En,
            LanguageCli::Pl => Language::Pl,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AnimationCli {
    Api,
    Etl,
}

/// Inspect the portfolio catalog, play its animations and send contact messages
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Language to render in
    #[arg(short, long, value_enum, global = true, default_value = "en")]
    lang: LanguageCli,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Resolve a dot-separated translation key
    Resolve {
        /// Key path, e.g. `animation.steps.request.title`
        key: String,
    },
    /// Report key paths missing from either language
    Coverage,
    /// Play an animation against a logical clock
    Play {
        #[arg(value_enum)]
        animation: AnimationCli,
        /// Number of ticks to run
        #[arg(short, long, default_value_t = 8)]
        ticks: usize,
        /// Seed for the challenge draws (API animation only)
        #[arg(long)]
        seed: Option<u64>,
        /// Force the error presentation after this many ticks, then clear it
        #[arg(long)]
        error_at: Option<usize>,
        /// Toggle the language after this many ticks
        #[arg(long)]
        switch_at: Option<usize>,
    },
    /// Send a message through the configured email service
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Override the email service endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let context = LanguageContext::builtin()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
        .with_language(cli.lang.into());

    match cli.command {
        CliCommand::Resolve { key } => run_resolve(&context, &key),
        CliCommand::Coverage => run_coverage(&context),
        CliCommand::Play {
            animation,
            ticks,
            seed,
            error_at,
            switch_at,
        } => run_play(context, animation, ticks, seed, error_at, switch_at),
        CliCommand::Contact {
            name,
            email,
            message,
            endpoint,
        } => run_contact(&context, ContactForm::new(name, email, message), endpoint),
    }
}

fn run_resolve(context: &LanguageContext, key: &str) {
    match context.translator().resolve(key) {
        Resolved::Found(value) => {
            let rendered = match value {
                serde_json::Value::String(text) => text.clone(),
                other => serde_json::to_string_pretty(other).unwrap_or_else(|e| {
                    exit_with_error(&format!("Failed to render value: {}", e))
                }),
            };
            println!("{}", rendered);
        }
        Resolved::Missing(key) => {
            println!("{}", key);
            std::process::exit(2);
        }
    }
}

fn run_coverage(context: &LanguageContext) {
    let report = context.dictionary().coverage();
    println!("Key paths across all languages: {}", report.total_paths);
    if report.is_complete() {
        println!("Coverage complete.");
        return;
    }
    for (language, paths) in &report.missing {
        println!("\nMissing in '{}' ({}):", language, paths.len());
        for path in paths {
            println!("  - {}", path);
        }
    }
    std::process::exit(1);
}

fn run_play(
    mut context: LanguageContext,
    kind: AnimationCli,
    ticks: usize,
    seed: Option<u64>,
    error_at: Option<usize>,
    switch_at: Option<usize>,
) {
    let built = match kind {
        AnimationCli::Api => match seed {
            Some(seed) => animation::api::sequencer_with(RandomChallenges::seeded(seed)),
            None => animation::api::sequencer(),
        },
        AnimationCli::Etl => animation::etl::sequencer(),
    };
    let mut sequencer =
        built.unwrap_or_else(|e| exit_with_error(&format!("Failed to build sequencer: {}", e)));

    sequencer.start(0);
    print_frame(0, &sequencer, &context);

    for tick in 1..=ticks {
        let Some(due) = sequencer.next_deadline() else {
            break;
        };
        sequencer.advance_to(due);

        if switch_at == Some(tick) {
            let language = context.toggle_language();
            println!("  -> Language switched to '{}'", language);
        }
        print_frame(due, &sequencer, &context);

        if error_at == Some(tick) {
            sequencer.force_error();
            print_frame(due, &sequencer, &context);
            sequencer.clear_error(due);
            println!("  -> Error cleared, resuming from step {}", sequencer.current_index());
        }
    }
}

fn print_frame(now_ms: u64, sequencer: &Sequencer, context: &LanguageContext) {
    let translator = context.translator();
    let controls = Controls::render(sequencer, &translator);
    match Frame::render(sequencer, &translator) {
        Frame::Step(view) => {
            println!(
                "[{:>6} ms] {}/{} {} ({}) - {}",
                now_ms,
                view.position + 1,
                view.total,
                view.title,
                view.status,
                view.description
            );
            if let Some(challenge) = view.challenge {
                println!("             challenge: {}", challenge);
            }
        }
        Frame::Error(view) => {
            println!(
                "[{:>6} ms] {} ({}) - {} [{} | {}]",
                now_ms,
                view.title,
                view.status,
                view.description,
                controls.play_pause,
                controls.force_error
            );
        }
    }
}

fn run_contact(context: &LanguageContext, form: ContactForm, endpoint: Option<String>) {
    let config = SiteConfig::from_env()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid configuration: {}", e)));
    if config.email.is_none() {
        eprintln!("Warning: email service is not configured; the message cannot be sent.");
    }

    let transport = match endpoint {
        Some(endpoint) => EmailJsTransport::new().with_endpoint(endpoint),
        None => EmailJsTransport::new(),
    };
    let mut controller = ContactController::new(transport, config.email);
    controller.update(Field::Name, form.name);
    controller.update(Field::Email, form.email);
    controller.update(Field::Message, form.message);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to start runtime: {}", e)));

    let translator = context.translator();
    let status = runtime.block_on(controller.submit(&translator)).clone();
    match status {
        SubmitStatus::Success(message) => println!("{}", message),
        SubmitStatus::Error { message, cause } => {
            eprintln!("{}", message);
            exit_with_error(&cause.to_string());
        }
        SubmitStatus::Idle => {}
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
