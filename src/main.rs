use log::{debug, error};
use std::env;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use pantry_chef::config::AppConfig;
use pantry_chef::options::{find_dietary, DIETARY_OPTIONS, LANGUAGES};
use pantry_chef::speech::NoSpeechCapture;
use pantry_chef::{render_html, render_text, RecipeError, RecipeForm, RecipeGenerator};

const HELP: &str = "\
Type your ingredients, then :go to get a recipe.
  :diet <name>   toggle a dietary option
  :lang <name>   choose the output language
  :mic           start/stop dictation
  :show          show the form
  :options       list dietary options and languages
  :html          print the result as HTML
  :help          show this help
  :quit          exit";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Ingredients(&'a str),
    Diet(&'a str),
    Lang(&'a str),
    Go,
    Mic,
    Show,
    Options,
    Html,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Command::Ingredients(line);
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command, ""));

    match name {
        "diet" => Command::Diet(arg),
        "lang" => Command::Lang(arg),
        "go" => Command::Go,
        "mic" => Command::Mic,
        "show" => Command::Show,
        "options" => Command::Options,
        "html" => Command::Html,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(name),
    }
}

/// Submit the form, printing the loading view while the request runs.
/// Returns false when the form rejected the submission.
async fn submit(form: &mut RecipeForm, generator: &Result<RecipeGenerator, String>) -> bool {
    let Some(request) = form.begin_submit() else {
        return false;
    };
    println!("{}", render_text(&form.view()));

    let outcome = match generator {
        Ok(generator) => {
            generator
                .generate(
                    &request.ingredients,
                    &request.dietary_options,
                    &request.language,
                )
                .await
        }
        // Same outcome as a failed call: the form shows the generic message
        Err(reason) => Err(RecipeError::GenerationFailed(reason.clone().into())),
    };
    form.finish_submit(outcome);
    true
}

fn print_form(form: &RecipeForm) {
    println!("Ingredients: {}", form.ingredients());
    let dietary = if form.dietary_options().is_empty() {
        "None".to_string()
    } else {
        form.dietary_options().join(", ")
    };
    println!("Dietary:     {}", dietary);
    println!("Language:    {}", form.language());
    if !form.dictation_supported() {
        println!("Dictation:   not available");
    }
}

fn print_options() {
    println!("Dietary options:");
    for option in DIETARY_OPTIONS {
        println!("  {:<12} {}", option.id, option.label);
    }
    println!("Languages:");
    for language in LANGUAGES {
        println!("  {:<17} {}", language.value, language.label);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let generator = RecipeGenerator::builder()
        .config(config.clone())
        .build()
        .map_err(|e| {
            error!("{}", e);
            e.to_string()
        });

    let mut form = RecipeForm::new(&config.default_language, Box::new(NoSpeechCapture));

    // Ingredients given on the command line are submitted right away
    if let Some(ingredients) = env::args().nth(1) {
        form.set_ingredients(ingredients);
        submit(&mut form, &generator).await;
        println!("{}", render_text(&form.view()));
        return Ok(());
    }

    println!("{}", HELP);
    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        form.process_capture_events();

        match parse_command(&line) {
            Command::Ingredients("") => {}
            Command::Ingredients(text) => form.set_ingredients(text),
            Command::Diet(name) => match find_dietary(name) {
                Some(option) => {
                    form.toggle_dietary(option.label);
                    print_form(&form);
                }
                None => println!("Unknown dietary option '{}', see :options", name),
            },
            Command::Lang(name) => {
                if form.select_language(name) {
                    print_form(&form);
                } else {
                    println!("Unknown language '{}', see :options", name);
                }
            }
            Command::Go => {
                submit(&mut form, &generator).await;
                println!("{}", render_text(&form.view()));
            }
            Command::Mic => {
                if form.dictation_supported() {
                    form.toggle_dictation();
                } else {
                    println!("Dictation is not available on this platform");
                }
            }
            Command::Show => print_form(&form),
            Command::Options => print_options(),
            Command::Html => println!("{}", render_html(&form.view())),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(name) => {
                debug!("Unknown command: {}", name);
                println!("Unknown command ':{}', see :help", name);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_chef::form::EMPTY_INGREDIENTS_MESSAGE;

    #[test]
    fn test_parse_plain_text_as_ingredients() {
        assert_eq!(
            parse_command("  eggs, rice \n"),
            Command::Ingredients("eggs, rice")
        );
        assert_eq!(parse_command(""), Command::Ingredients(""));
    }

    #[tokio::test]
    async fn test_blank_submit_skips_loading() {
        let mut form = RecipeForm::default();
        let generator = Err("no key".to_string());

        assert!(!submit(&mut form, &generator).await);
        assert!(!form.is_loading());
        assert_eq!(form.error(), Some(EMPTY_INGREDIENTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_without_generator_shows_failure() {
        let mut form = RecipeForm::default();
        form.set_ingredients("eggs");
        let generator = Err("no key".to_string());

        assert!(submit(&mut form, &generator).await);
        assert!(!form.is_loading());
        assert_eq!(
            form.error(),
            Some("Failed to generate recipe. Please check your API key and try again.")
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command(":go"), Command::Go);
        assert_eq!(parse_command(":diet  gluten-free "), Command::Diet("gluten-free"));
        assert_eq!(
            parse_command(":lang Mandarin Chinese"),
            Command::Lang("Mandarin Chinese")
        );
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":bake"), Command::Unknown("bake"));
    }
}
