//! rollcall operator console
//!
//! Main application entry point: a thin interactive front end over the roster
//! service. All roster logic lives behind [`RosterService`]; this binary only
//! parses operator commands and renders results.

use std::io::Write as _;

use tokio::io::AsyncBufReadExt;
use tracing::{error, info};

use rollcall::models::{CreateParticipantRequest, Participant, ParticipantPatch, PaymentStatus};
use rollcall::utils::helpers::truncate_text;
use rollcall::utils::logging;
use rollcall::{RosterService, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file appender alive
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting rollcall console ({})", rollcall::info());

    let mut service = RosterService::new(&settings).await?;

    match service.load_roster().await {
        Ok(count) => println!("Loaded {} participants.", count),
        Err(e) => {
            error!(error = %e, "Initial roster load failed");
            println!("Failed to load participant data: {}", e);
            println!("Fix the data source and run `reload` to retry.");
        }
    }

    match service.current_user() {
        Some(name) => println!("Welcome back, {}. Type `help` for commands.", name),
        None => println!("Log in with `login <name>` to manage the roster."),
    }

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        let keep_going = match dispatch(&mut service, line.trim()).await {
            Ok(keep_going) => keep_going,
            Err(e) => {
                // every core failure is recoverable; report and carry on
                println!("error: {}", e);
                true
            }
        };

        if !keep_going {
            break;
        }
        prompt()?;
    }

    info!("rollcall console shut down");
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("rollcall> ");
    std::io::stdout().flush()
}

/// Handle one console command; returns false when the operator quits
async fn dispatch(service: &mut RosterService, line: &str) -> rollcall::Result<bool> {
    if line.is_empty() {
        return Ok(true);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "quit" | "exit" => return Ok(false),
        "help" => print_help(),
        "login" => {
            service.login(rest).await?;
            println!("Logged in as {}.", rest.trim());
        }
        "theme" => {
            let theme = service.toggle_theme().await?;
            println!("Switched to {} mode.", theme);
        }
        _ if !service.is_logged_in() => {
            println!("Please log in first: login <name>");
        }
        "logout" => {
            service.logout().await?;
            println!("Logged out.");
        }
        "reload" => {
            let count = service.load_roster().await?;
            println!("Loaded {} participants.", count);
        }
        "list" => {
            render_view(service);
        }
        "search" => {
            let count = service.search(rest);
            match service.active_search_term() {
                Some(term) => println!("{} result(s) for \"{}\":", count, term),
                None => println!("Search cleared."),
            }
            render_view(service);
        }
        "clear" => {
            service.clear_search();
            println!("Search cleared.");
        }
        "show" => {
            let id = parse_id(rest)?;
            render_participant(service.find_participant(id)?);
        }
        "add" => {
            let (id, name) = parse_id_and_text(rest, "usage: add <id> <name>")?;
            let statistics = service.add_participant(CreateParticipantRequest {
                id,
                name: name.to_string(),
                degree_programme: String::new(),
                email: String::new(),
                whatsapp: String::new(),
                lunch_type: String::new(),
                living_district: String::new(),
                remarks: String::new(),
            })?;
            println!("Added participant {}. Roster now has {}.", id, statistics.total);
        }
        "edit" => {
            let (id, rest) = parse_id_and_text(rest, "usage: edit <id> <field> <value>")?;
            let (field, value) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                rollcall::RollcallError::InvalidInput("usage: edit <id> <field> <value>".to_string())
            })?;
            service.update_participant(id, patch_for(field, value.trim())?)?;
            println!("Updated participant {}.", id);
        }
        "toggle" => {
            let id = parse_id(rest)?;
            let attended = service.toggle_attendance(id)?;
            let name = &service.find_participant(id)?.name;
            if attended {
                println!("Marked {} as attended.", name);
            } else {
                println!("Unmarked attendance for {}.", name);
            }
            render_statistics(service);
        }
        "stats" => render_statistics(service),
        "history" => render_history(service),
        "export" => {
            let path = service.export_to_file().await?;
            println!("Exported roster to {}.", path.display());
        }
        _ => println!("Unknown command: {}. Type `help` for the command list.", command),
    }

    Ok(true)
}

fn print_help() {
    println!(
        "commands:\n\
         \x20 login <name> / logout      operator session\n\
         \x20 list                       show the current view\n\
         \x20 search <term> / clear      filter by name or id substring\n\
         \x20 show <id>                  participant details\n\
         \x20 add <id> <name>            add a participant\n\
         \x20 edit <id> <field> <value>  update one field (name, degree, email,\n\
         \x20                            whatsapp, lunch, payment, district, remarks)\n\
         \x20 toggle <id>                flip attendance\n\
         \x20 stats                      attendance statistics\n\
         \x20 history                    recent activity\n\
         \x20 export                     write a JSON snapshot\n\
         \x20 reload                     reload the roster from its sources\n\
         \x20 theme                      toggle light/dark preference\n\
         \x20 quit"
    );
}

fn parse_id(text: &str) -> rollcall::Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| rollcall::RollcallError::InvalidInput(format!("not a participant id: {}", text)))
}

fn parse_id_and_text<'a>(rest: &'a str, usage: &str) -> rollcall::Result<(i64, &'a str)> {
    let (id, text) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| rollcall::RollcallError::InvalidInput(usage.to_string()))?;
    Ok((parse_id(id)?, text.trim()))
}

fn patch_for(field: &str, value: &str) -> rollcall::Result<ParticipantPatch> {
    let value = value.to_string();
    let mut patch = ParticipantPatch::default();

    match field {
        "name" => patch.name = Some(value),
        "degree" => patch.degree_programme = Some(value),
        "email" => patch.email = Some(value),
        "whatsapp" => patch.whatsapp = Some(value),
        "lunch" => patch.lunch_type = Some(value),
        "payment" => patch.payment_status = Some(value),
        "district" => patch.living_district = Some(value),
        "remarks" => patch.remarks = Some(value),
        other => {
            return Err(rollcall::RollcallError::InvalidInput(format!(
                "unknown field: {}",
                other
            )))
        }
    }

    Ok(patch)
}

fn render_view(service: &RosterService) {
    let view = service.view();
    if view.is_empty() {
        println!("No participants found.");
        return;
    }

    for participant in view {
        let mark = if participant.attended { "x" } else { " " };
        println!("[{}] #{:<4} {}", mark, participant.id, participant.name);
    }
}

fn render_participant(participant: &Participant) {
    println!("#{} {}", participant.id, participant.name);
    println!("  degree:   {}", participant.degree_programme);
    println!("  email:    {}", participant.email);
    println!("  whatsapp: {}", participant.whatsapp);
    println!("  lunch:    {}", participant.lunch_type);
    println!("  district: {}", participant.living_district);
    println!("  payment:  {}", PaymentStatus::classify(&participant.payment_status).label());
    println!("  attended: {}", if participant.attended { "yes" } else { "no" });
    if !participant.remarks.is_empty() {
        println!("  remarks:  {}", participant.remarks);
    }
}

fn render_statistics(service: &RosterService) {
    let statistics = service.statistics();
    println!(
        "total: {}  attended: {}  rate: {}%",
        statistics.total, statistics.attended, statistics.rate
    );
}

fn render_history(service: &RosterService) {
    let log = service.activity_log();
    if log.is_empty() {
        println!("No activity history available.");
        return;
    }

    for record in log.entries() {
        println!(
            "{}  [{:<10}] {}",
            record.formatted_time(),
            record.category.to_string(),
            truncate_text(&record.description, 70)
        );
    }
}
