use std::io::{self, Write};

use crate::app::{App, AppError};
use crate::conversion::format_result;
use crate::country::{filter_countries, LookupError};
use crate::expense::format_amount;
use crate::navigation::Page;
use crate::translate::{language_name, translate_or_error_text, LANGUAGES};

/// Shows the sidebar menu and returns the chosen page, or `None` to quit.
pub fn main_menu(app: &App) -> Result<Option<Page>, AppError> {
    println!("\n=== Tourist Converter ===");
    for (i, page) in Page::ALL.iter().enumerate() {
        let marker = if *page == app.navigator.current() { "*" } else { " " };
        println!("{marker}{}) {}", i + 1, page.title());
    }
    println!(" 0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "0" => return Ok(None),
            other => {
                let picked = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| Page::ALL.get(i).copied());
                match picked {
                    Some(page) => return Ok(Some(page)),
                    None => println!("Invalid selection, try again."),
                }
            }
        }
    }
}

pub fn handle_home() {
    println!("\n-- Home --");
    println!("Your travel companion: convert units and currencies, translate");
    println!("phrases, track spending, and look up what to do and how to behave");
    println!("in the country you are visiting.");
}

/// Conversion page: pick a category and units, then convert values until an
/// empty line is entered.
pub fn handle_conversion(app: &App) -> Result<(), AppError> {
    println!("\n-- Conversion Tool --");
    let names = app.engine.category_names();
    let default_category = app.default_category();
    let category = pick("Category", &names, &default_category)?;
    let units = app.engine.units_for(&category)?;
    let (default_from, default_to) = app.engine.default_pair(&category)?;
    let from = pick("From unit", &units, default_from)?;
    let to = pick("To unit", &units, default_to)?;
    loop {
        let input = read_line(&format!("Value in {from} (empty to return): "))?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }
        let Ok(value) = input.parse::<f64>() else {
            println!("Please enter a number.");
            continue;
        };
        let result = app.engine.convert(&category, &from, &to, value)?;
        println!("{value} {from} = {} {to}", format_result(result));
    }
}

pub fn handle_translate(app: &App) -> Result<(), AppError> {
    println!("\n-- Translator --");
    let text = read_line("Text to translate: ")?;
    if text.trim().is_empty() {
        println!("Nothing to translate.");
        return Ok(());
    }
    let default_target = app.config.translation.default_target.as_str();
    let target = loop {
        let code = read_line(&format!(
            "Target language code ({default_target}, '?' to list): "
        ))?;
        let code = code.trim();
        if code.is_empty() {
            break default_target.to_string();
        }
        if code == "?" {
            for (code, name) in LANGUAGES {
                println!("  {code:<3} {name}");
            }
            continue;
        }
        if language_name(code).is_some() {
            break code.to_string();
        }
        println!("Unknown language code.");
    };
    let translated = translate_or_error_text(app.translator.as_ref(), text.trim(), &target);
    println!("{translated}");
    Ok(())
}

pub fn handle_expenses(app: &mut App) -> Result<(), AppError> {
    loop {
        println!("\n-- Expense Tracker --");
        for expense in app.ledger.entries() {
            println!("  {:<30} {}", expense.description, format_amount(expense.amount));
        }
        println!("Total Spent: {}", format_amount(app.ledger.total()));
        let sel = read_line("1) Add expense  0) Back: ")?;
        match sel.trim() {
            "1" => {
                let amount = read_line("Amount: ")?;
                let description = read_line("Description: ")?;
                if let Err(err) = app.ledger.add_from_input(&amount, &description) {
                    println!("Not added: {err}");
                }
            }
            "0" | "" => return Ok(()),
            _ => println!("Invalid selection."),
        }
    }
}

pub fn handle_cultural_recs(app: &App) -> Result<(), AppError> {
    println!("\n-- Cultural Recs --");
    let Some(country) = pick_country()? else {
        return Ok(());
    };
    match app.directory.cultural_profile(&country) {
        Ok(profile) => {
            if let Some(phrases) = &profile.key_phrases {
                println!("\nKey Phrases");
                for (phrase, local) in phrases {
                    println!("  {phrase}: {local}");
                }
            }
            if let Some(norms) = &profile.cultural_norms {
                println!("\nCultural Norms\n{norms}");
            }
        }
        Err(err) => report_lookup_error(&country, &err),
    }
    Ok(())
}

pub fn handle_extracurriculars(app: &App) -> Result<(), AppError> {
    println!("\n-- Extracurriculars --");
    let Some(country) = pick_country()? else {
        return Ok(());
    };
    match app.directory.extracurriculars(&country) {
        Ok(activities) => {
            for (title, content) in activities.sections() {
                println!("\n{title}\n{content}");
            }
        }
        Err(err) => report_lookup_error(&country, &err),
    }
    Ok(())
}

fn report_lookup_error(country: &str, err: &LookupError) {
    match err {
        LookupError::NotFound(_) => println!("No data available for {country}."),
        other => println!("Could not load data for {country}: {other}"),
    }
}

fn pick_country() -> Result<Option<String>, AppError> {
    loop {
        let search = read_line("Search country (empty to return): ")?;
        if search.trim().is_empty() {
            return Ok(None);
        }
        let matches = filter_countries(&search);
        match matches.as_slice() {
            [] => println!("No matching country."),
            [only] => return Ok(Some(only.to_string())),
            many => {
                for (i, name) in many.iter().enumerate() {
                    println!("  {}) {name}", i + 1);
                }
                let sel = read_line("Number: ")?;
                if let Some(name) = sel
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| many.get(i))
                {
                    return Ok(Some(name.to_string()));
                }
                println!("Invalid selection.");
            }
        }
    }
}

/// Numbered choice among `options`; an empty answer keeps `default`.
fn pick(label: &str, options: &[&str], default: &str) -> Result<String, AppError> {
    let listing: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}) {o}", i + 1))
        .collect();
    println!("{}", listing.join("  "));
    loop {
        let sel = read_line(&format!("{label} [{default}]: "))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default.to_string());
        }
        let by_number = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i));
        let by_label = options.iter().find(|o| **o == sel);
        match by_number.or(by_label) {
            Some(choice) => return Ok(choice.to_string()),
            None => println!("Unsupported choice."),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(buf)
}
