use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use slatebook_auth::AdminPasswords;
use slatebook_auth::password::meets_policy;
use slatebook_cli::seeder::{self, SeedConfig};
use slatebook_config::PortalConfig;
use slatebook_core::FileStorage;
use slatebook_models::{Announcement, SettingsUpdate};
use slatebook_store::{CorruptionPolicy, Store};

#[derive(Parser)]
#[command(name = "slatebook-cli")]
#[command(about = "Slatebook CLI - Administrative tools for the school portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the seed document if none exists yet
    Init,
    /// Seed the document with fake students, teachers, and parents
    Seed {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "25")]
        students: usize,

        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Skip creating linked parent accounts
        #[arg(long)]
        no_parents: bool,
    },
    /// List the records in one collection
    List {
        /// Which collection to list
        #[arg(value_enum)]
        collection: Collection,
    },
    /// Show entity counts and total recorded revenue
    Stats,
    /// Show the current school settings
    ShowSettings,
    /// Change the current term
    SetTerm {
        /// Term label, e.g. "Second Term"
        term: String,
    },
    /// Change the current academic session
    SetSession {
        /// Session label, e.g. "2025/2026"
        session: String,
    },
    /// Post a school announcement
    AddAnnouncement {
        /// Announcement title (prompted if not provided)
        #[arg(short = 't', long)]
        title: Option<String>,

        /// Announcement body (prompted if not provided)
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Change the admin password (stored under the override key)
    SetAdminPassword {
        /// New password (prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Collection {
    Students,
    Teachers,
    Parents,
    LessonNotes,
    Videos,
    Assessments,
    Results,
    Gallery,
    Payments,
    Announcements,
}

fn main() -> Result<()> {
    dotenv().ok();
    slatebook_cli::logging::init_console_logging();

    let config = PortalConfig::from_env();
    let policy = if config.reseed_on_corruption {
        CorruptionPolicy::Reseed
    } else {
        CorruptionPolicy::Fail
    };
    let store = Store::with_policy(
        Box::new(FileStorage::new(config.data_file.clone())),
        policy,
    );

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            if store.init().context("initializing document")? {
                println!("✅ Seed document written to {}", config.data_file.display());
            } else {
                println!("Document already exists at {}; left untouched", config.data_file.display());
            }
        }
        Commands::Seed {
            students,
            teachers,
            no_parents,
        } => {
            store.init().context("initializing document")?;
            seeder::seed_all(
                &store,
                SeedConfig {
                    students,
                    teachers,
                    with_parents: !no_parents,
                },
            )?;
        }
        Commands::List { collection } => handle_list(&store, collection)?,
        Commands::Stats => handle_stats(&store)?,
        Commands::ShowSettings => {
            let settings = store.settings().context("reading settings")?;
            println!("{}", settings.school_name);
            println!("  Address:  {}", settings.address);
            println!("  Phone:    {}", settings.phone);
            println!("  Email:    {}", settings.email);
            println!("  Session:  {}", settings.current_session);
            println!("  Term:     {}", settings.current_term);
            println!(
                "  Account:  {} / {} ({})",
                settings.bank_account.bank_name,
                settings.bank_account.account_number,
                settings.bank_account.account_name
            );
        }
        Commands::SetTerm { term } => {
            store
                .update_settings(SettingsUpdate {
                    current_term: Some(term.clone()),
                    ..Default::default()
                })
                .context("updating settings")?;
            println!("✅ Current term set to {}", term);
        }
        Commands::SetSession { session } => {
            store
                .update_settings(SettingsUpdate {
                    current_session: Some(session.clone()),
                    ..Default::default()
                })
                .context("updating settings")?;
            println!("✅ Current session set to {}", session);
        }
        Commands::AddAnnouncement { title, message } => {
            let title = match title {
                Some(title) => title,
                None => Input::new()
                    .with_prompt("Title")
                    .interact_text()
                    .context("reading title")?,
            };
            let message = match message {
                Some(message) => message,
                None => Input::new()
                    .with_prompt("Message")
                    .interact_text()
                    .context("reading message")?,
            };
            store
                .add_announcement(Announcement::new(title, message))
                .context("adding announcement")?;
            println!("✅ Announcement posted");
        }
        Commands::SetAdminPassword { password } => {
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("New admin password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()
                    .context("reading password")?,
            };
            if !meets_policy(&password) {
                bail!(
                    "Password must contain uppercase, lowercase letters and numbers (min 6 characters)"
                );
            }
            let admins = AdminPasswords::new(
                Box::new(FileStorage::new(config.admin_password_file.clone())),
                config.allow_default_admin_login,
            );
            admins.set_password(&password).context("storing password")?;
            println!("✅ Admin password updated");
        }
    }

    Ok(())
}

fn handle_list(store: &Store, collection: Collection) -> Result<()> {
    match collection {
        Collection::Students => {
            for s in store.students()? {
                println!("{}  {}  {}  ({})", s.id, s.admission_number, s.name, s.class_name);
            }
        }
        Collection::Teachers => {
            for t in store.teachers()? {
                println!("{}  {}  {}  [{}]", t.id, t.email, t.name, t.subjects.join(", "));
            }
        }
        Collection::Parents => {
            for p in store.parents()? {
                println!("{}  {}  {} (child: {})", p.id, p.email, p.name, p.child_admission_number);
            }
        }
        Collection::LessonNotes => {
            for n in store.lesson_notes()? {
                println!("{}  {} - {} ({}, {})", n.id, n.subject, n.title, n.class_name, n.term);
            }
        }
        Collection::Videos => {
            for v in store.videos()? {
                println!("{}  {} - {}  {}", v.id, v.subject, v.title, v.url);
            }
        }
        Collection::Assessments => {
            for a in store.assessments()? {
                println!("{}  {} - {} ({}, {})", a.id, a.subject, a.title, a.class_name, a.term);
            }
        }
        Collection::Results => {
            for r in store.results()? {
                println!(
                    "{}  {}  {} {}: CA {} + Exam {} = {} ({})",
                    r.id, r.student_id, r.subject, r.term, r.ca, r.exam, r.total, r.grade
                );
            }
        }
        Collection::Gallery => {
            for g in store.gallery()? {
                println!("{}  [{}] {}  {}", g.id, g.category, g.title, g.url);
            }
        }
        Collection::Payments => {
            for p in store.payments()? {
                println!(
                    "{}  {}  {} ₦{:.2}  {}  {:?}",
                    p.id, p.student_id, p.term, p.amount, p.reference, p.status
                );
            }
        }
        Collection::Announcements => {
            for a in store.announcements()? {
                println!("{}  {}  {}", a.id, a.date.format("%Y-%m-%d"), a.title);
            }
        }
    }
    Ok(())
}

fn handle_stats(store: &Store) -> Result<()> {
    println!("Students:      {}", store.students()?.len());
    println!("Teachers:      {}", store.teachers()?.len());
    println!("Parents:       {}", store.parents()?.len());
    println!("Lesson notes:  {}", store.lesson_notes()?.len());
    println!("Videos:        {}", store.videos()?.len());
    println!("Assessments:   {}", store.assessments()?.len());
    println!("Results:       {}", store.results()?.len());
    println!("Gallery:       {}", store.gallery()?.len());
    println!("Payments:      {}", store.payments()?.len());
    println!("Announcements: {}", store.announcements()?.len());
    println!("Revenue:       ₦{:.2}", store.total_revenue()?);
    Ok(())
}
