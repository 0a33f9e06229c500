//! Pretty terminal output with colors and badges.

use colored::Colorize;

use crate::report::{PGPASSWORD, PgVarStatus, Report, UrlStatus};

// === Environment report ===

pub fn print_check_banner() {
    println!();
    println!("{}", "Checking database environment...".white().bold());
    println!();
}

pub fn print_report(report: &Report) {
    if let Some(status) = &report.database_url {
        match status {
            UrlStatus::Present { masked } => {
                println!(
                    "{} {} {}",
                    "✓".green().bold(),
                    "DATABASE_URL".white().bold(),
                    masked.dimmed()
                );
            }
            UrlStatus::Missing => {
                println!(
                    "{} {}",
                    "✗".red().bold(),
                    "DATABASE_URL not found".yellow()
                );
            }
        }
    }

    if report.pg_vars_skipped {
        println!(
            "  {}",
            "connection parameters skipped (no DATABASE_URL)".dimmed()
        );
        println!();
        return;
    }

    if !report.pg_vars.is_empty() {
        println!();
        println!("{}", "Connection parameters:".white().bold());
        for var in &report.pg_vars {
            print_pg_var(var);
        }
    }

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "Database environment check completed".white()
    );
    println!();
}

fn print_pg_var(var: &PgVarStatus) {
    if !var.present {
        println!(
            "  {} {}",
            badge(" - ", colored::Color::Black, colored::Color::Yellow),
            var.name.dimmed()
        );
        return;
    }

    // The password's presence is confirmed, its value stays hidden.
    if var.name == PGPASSWORD {
        println!(
            "  {} {} {}",
            badge("SET", colored::Color::Black, colored::Color::Green),
            var.name.white(),
            "(value hidden)".dimmed()
        );
    } else {
        println!(
            "  {} {}",
            badge("SET", colored::Color::Black, colored::Color::Green),
            var.name.white()
        );
    }
}

// === Startup ===

pub fn print_server_startup(addr: &str) {
    println!("{} {}", "✓".green().bold(), "Status server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Routes:".white().bold());
    println!(
        "  {} {}  {}",
        "GET ".green(),
        "/*".white(),
        "GoatedVIPs platform status page".dimmed()
    );
    println!();
}

// === Badges ===

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}
