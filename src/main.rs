//! Village Care terminal client.
//!
//! Usage:
//!   village-care symptoms            # Walk the symptom checker
//!   village-care book                # Book a consultation
//!   village-care chat                # Talk to the health assistant
//!   village-care search <words>      # Voice search for nearby services
//!   village-care pharmacy [query]    # Medicine stock at local pharmacies
//!   village-care lang [code]         # Show or change the language
//!   village-care say <text>          # Speak text in the current language
//!
//! Optional environment variables:
//! - VILLAGE_CARE_DATA_DIR (defaults to .village-care)
//! - DEFAULT_LANGUAGE (defaults to en)
//! - SPEECH_COMMAND (e.g. espeak-ng; speech is off when unset)
//! - CHAT_REPLY_DELAY_MS (defaults to 1500)

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};
use village_care::assistant::{self, ChatSession, ReplyAction};
use village_care::booking::{self, BookingWizard, ConsultationType, AVAILABLE_DATES};
use village_care::config::Config;
use village_care::i18n::{fill, Language, LocalizationContext, MessageKey};
use village_care::pharmacy;
use village_care::preferences::FilePreferenceStore;
use village_care::speech::{CommandSynthesizer, SpeechSynthesizer, Unavailable};
use village_care::symptom::SymptomChecker;
use village_care::voice_search;
use village_care::wizard::{Field, FieldKind, Transition, Wizard};

type Input = Lines<BufReader<Stdin>>;

enum FieldOutcome {
    Answered,
    Back,
    Quit,
}

fn print_usage() {
    println!("Village Care");
    println!();
    println!("Usage: village-care <command>");
    println!();
    println!("Commands:");
    println!("  symptoms          Walk the symptom checker");
    println!("  book              Book a consultation");
    println!("  chat              Talk to the health assistant");
    println!("  search <words>    Voice search for nearby services");
    println!("  pharmacy [query]  Medicine stock at local pharmacies");
    println!("  lang [code]       Show or change the language");
    println!("  say <text>        Speak text in the current language");
}

async fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let line = input.next_line().await.context("Failed to read input")?;
    Ok(line.map(|l| l.trim().to_string()))
}

/// Display text for an option value.
fn describe_option(field_id: &str, value: &str) -> String {
    match field_id {
        booking::DOCTOR => match booking::find_doctor(value) {
            Some(d) => format!(
                "{} - {} ({}★, {} years, {})",
                d.name, d.specialty, d.rating, d.experience_years, d.location
            ),
            None => value.to_string(),
        },
        booking::CONSULTATION_TYPE => match ConsultationType::from_value(value) {
            Some(t) => format!("{}: {}", t.label(), t.description()),
            None => value.to_string(),
        },
        booking::DATE => match AVAILABLE_DATES.iter().find(|d| d.date == value) {
            Some(d) => format!("{}, {} ({} slots)", d.day, d.date, d.slots),
            None => value.to_string(),
        },
        _ => value.to_string(),
    }
}

fn select_numbers(wizard: &mut Wizard, field: &Field, line: &str) -> Result<(), String> {
    let options = field.options();

    for part in line.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let index: usize = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
        let option = index
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .ok_or_else(|| format!("There is no option {}", index))?;

        wizard
            .select_option(field.id, &option.value)
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

async fn answer_field(
    wizard: &mut Wizard,
    field: &Field,
    input: &mut Input,
) -> Result<FieldOutcome> {
    loop {
        let selected = wizard.answers().selected(field.id);
        for (i, option) in field.options().iter().enumerate() {
            let mark = if selected.contains(&option.value.as_str()) { "x" } else { " " };
            let unavailable = if option.enabled { "" } else { " (not available)" };
            println!(
                "  [{}] {}. {}{}",
                mark,
                i + 1,
                describe_option(field.id, &option.value),
                unavailable
            );
        }

        let hint = match field.kind {
            FieldKind::SingleSelect(_) => "number",
            FieldKind::MultiSelect(_) => "numbers to toggle, comma separated",
            FieldKind::Text if field.required => "text",
            FieldKind::Text => "text, Enter to skip",
        };
        let label = format!("{} ({}, b=back, q=quit)", field.label, hint);
        let Some(line) = prompt(input, &label).await? else {
            return Ok(FieldOutcome::Quit);
        };

        match line.as_str() {
            "q" => return Ok(FieldOutcome::Quit),
            "b" => return Ok(FieldOutcome::Back),
            "" if !field.required => return Ok(FieldOutcome::Answered),
            _ => {}
        }

        let result = match field.kind {
            FieldKind::Text => wizard.set_text(field.id, &line).map_err(|e| e.to_string()),
            _ => select_numbers(wizard, field, &line),
        };

        match result {
            Ok(()) if wizard.answers().satisfies(field) => return Ok(FieldOutcome::Answered),
            Ok(()) => println!("An answer is required."),
            Err(message) => println!("{}", message),
        }
    }
}

/// Walk the wizard to completion. Returns `false` if the user quit.
async fn walk(wizard: &mut Wizard, ctx: &LocalizationContext, input: &mut Input) -> Result<bool> {
    'steps: while !wizard.is_completed() {
        let step = wizard.current_step().clone();
        let progress = wizard.progress();
        let position = progress.position.to_string();
        let total = progress.total.to_string();
        let counter = fill(
            ctx.translate(MessageKey::SymptomProgress),
            &[("current", position.as_str()), ("total", total.as_str())],
        );
        println!("\n[{}] {}", counter, step.title);

        for field in &step.fields {
            match answer_field(wizard, field, input).await? {
                FieldOutcome::Answered => {}
                FieldOutcome::Back => {
                    if !wizard.previous() {
                        println!("Already at the first step.");
                    }
                    continue 'steps;
                }
                FieldOutcome::Quit => return Ok(false),
            }
        }

        match wizard.next() {
            Transition::Blocked => println!("Please answer the required questions."),
            Transition::Advanced(index) => debug!("Moved to step {}", index),
            Transition::Completed => {}
        }
    }
    Ok(true)
}

async fn run_symptom_checker(ctx: &LocalizationContext, input: &mut Input) -> Result<()> {
    println!("{}", ctx.translate(MessageKey::SymptomTitle));
    println!("{}", ctx.translate(MessageKey::SymptomSubtitle));

    let mut checker = SymptomChecker::new()?;
    if !walk(checker.wizard_mut(), ctx, input).await? {
        return Ok(());
    }
    let Some(assessment) = checker.assessment() else {
        return Ok(());
    };

    let title = ctx.translate(assessment.tier.title_key());
    println!("\n========== {} ==========", ctx.translate(MessageKey::SymptomResultsTitle));
    println!("{}", title);
    println!("{}", ctx.translate(assessment.tier.description_key()));
    println!("→ {}", ctx.translate(assessment.action.label_key()));

    if let Some(warning) = assessment.emergency_warning {
        println!("\n⚠️  {}", ctx.translate(warning));
    }
    if !assessment.home_care_tips.is_empty() {
        println!("\n{}", ctx.translate(MessageKey::SymptomHomeCareTitle));
        for tip in &assessment.home_care_tips {
            println!("  • {}", tip);
        }
    }
    println!("\n{}", ctx.translate(MessageKey::SymptomDisclaimer));

    info!("Symptom check finished: {}", assessment.tier);
    ctx.speak(title).finished().await;
    Ok(())
}

async fn run_booking(ctx: &LocalizationContext, input: &mut Input) -> Result<()> {
    println!("{}", ctx.translate(MessageKey::BookingTitle));

    let mut booking = BookingWizard::new()?;
    if !walk(booking.wizard_mut(), ctx, input).await? {
        return Ok(());
    }
    let confirmation = booking.confirm()?;

    let confirmed = ctx.translate(MessageKey::BookingConfirmed);
    let summary = fill(
        ctx.translate(MessageKey::BookingSummary),
        &confirmation.summary_args(),
    );
    println!("\n========== {} ==========", confirmed);
    println!("{}", summary);
    println!("{} ({})", confirmation.consultation_type, confirmation.day);
    println!("{}", confirmation.doctor.location);
    for step in booking::NEXT_STEPS {
        println!("  • {}", step);
    }

    ctx.speak(&format!("{} {}", confirmed, summary))
        .finished()
        .await;
    Ok(())
}

async fn run_chat(ctx: &LocalizationContext, config: &Config, input: &mut Input) -> Result<()> {
    let mut session = ChatSession::new(ctx, config.chat_reply_delay);
    println!("{}", ctx.translate(MessageKey::ChatbotTitle));
    if let Some(greeting) = session.messages().first() {
        println!("🤖 {}", greeting.text);
    }
    println!("\nTry:");
    for question in assistant::quick_questions() {
        println!("  - {}", question);
    }

    loop {
        let Some(line) = prompt(input, "\nYou (q=quit)").await? else {
            break;
        };
        if line == "q" {
            break;
        }
        if session.send(&line, ctx).is_none() {
            continue;
        }

        println!("…");
        let Some(reply) = session.next_reply().await else {
            break;
        };
        println!("🤖 {}", reply.text);
        for follow_up in &reply.follow_up {
            println!("   ? {}", follow_up);
        }
        if reply.action == Some(ReplyAction::CheckPharmacy) {
            println!("   → village-care pharmacy <medicine>");
        }
        ctx.speak(&reply.text);
    }
    Ok(())
}

fn run_search(ctx: &LocalizationContext, transcript: &str) {
    let (filter, services) = voice_search::search(transcript);

    println!("{}", ctx.translate(MessageKey::MapNearbyTitle));
    match filter {
        Some(filter) => println!("Showing: {}", filter),
        None => println!("Showing: all services"),
    }
    if services.is_empty() {
        println!("{}", ctx.translate(MessageKey::MapNoResults));
    }
    for service in services {
        let open = if service.is_open { "open" } else { "closed" };
        println!(
            "  {} ({} km, {}★, {}) - {} - {}",
            service.name,
            service.distance_km,
            service.rating,
            open,
            service.address,
            service.phone
        );
    }
}

fn run_pharmacy(ctx: &LocalizationContext, query: &str) {
    println!("{}", ctx.translate(MessageKey::PharmacyTitle));
    let medicines = pharmacy::search(query);
    if medicines.is_empty() {
        println!("{}", ctx.translate(MessageKey::MapNoResults));
    }
    for medicine in medicines {
        println!(
            "\n{} ({}) - {} - {}",
            medicine.name, medicine.brand, medicine.category, medicine.price
        );
        for (store, level) in medicine.availability() {
            let reserve = if level.can_reserve() {
                format!(" [{}]", ctx.translate(MessageKey::PharmacyReserve))
            } else {
                String::new()
            };
            println!(
                "  {} ({} km): {}{}",
                store.name,
                store.distance_km,
                ctx.translate(level.label_key()),
                reserve
            );
        }
    }
}

fn run_language(ctx: &mut LocalizationContext, code: Option<&str>) {
    match code {
        Some(code) => {
            ctx.set_language(code);
            println!("{}", ctx.translate(MessageKey::DashboardWelcome));
        }
        None => {
            let current = ctx.current_language();
            for language in Language::all() {
                let mark = if language.code() == current { "*" } else { " " };
                println!("{} {} - {}", mark, language.code(), language.native_name());
            }
        }
    }
}

async fn run_say(ctx: &LocalizationContext, text: &str) {
    let task = ctx.speak(text);
    if task.is_skipped() {
        println!("Speech is not available. Set SPEECH_COMMAND (e.g. espeak-ng) to enable it.");
    }
    task.finished().await;
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("village_care=info".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }
    let command = args[1].as_str();
    let rest = args[2..].join(" ");

    let config = Config::from_env()?;
    debug!("Using data directory {}", config.data_dir.display());

    let store = Arc::new(FilePreferenceStore::new(&config.data_dir));
    let speech: Arc<dyn SpeechSynthesizer> = match &config.speech_command {
        Some(program) => Arc::new(CommandSynthesizer::new(program)),
        None => Arc::new(Unavailable),
    };
    let mut ctx = LocalizationContext::load(store, speech, config.default_language.code());
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    match command {
        "symptoms" => run_symptom_checker(&ctx, &mut input).await?,
        "book" => run_booking(&ctx, &mut input).await?,
        "chat" => run_chat(&ctx, &config, &mut input).await?,
        "search" => run_search(&ctx, &rest),
        "pharmacy" => run_pharmacy(&ctx, &rest),
        "lang" => run_language(&mut ctx, args.get(2).map(String::as_str)),
        "say" => run_say(&ctx, &rest).await,
        "--help" | "-h" | "help" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    debug!("Lookup metrics: {:?}", ctx.metrics());
    Ok(())
}
