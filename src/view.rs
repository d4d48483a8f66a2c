use std::fmt::Write;

use html_escape::encode_text;

use crate::model::Recipe;

pub const LOADING_MESSAGE: &str = "Whipping up something delicious...";
pub const IDLE_TITLE: &str = "Your recipe awaits!";
pub const IDLE_MESSAGE: &str = "Fill out the form above to discover your next delicious meal.";

/// What the result area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<'a> {
    /// A request is in flight
    Loading,
    /// A form error with no recipe to show
    Error(&'a str),
    /// A recipe, possibly the error-carrying kind
    Recipe(&'a Recipe),
    /// Nothing requested yet
    Idle,
}

/// Derive the result view from the form state.
///
/// An error message is only shown when there is no recipe, so an
/// error-carrying recipe wins once one exists.
pub fn result_view<'a>(
    loading: bool,
    error: Option<&'a str>,
    recipe: Option<&'a Recipe>,
) -> ResultView<'a> {
    if loading {
        return ResultView::Loading;
    }
    match (error, recipe) {
        (Some(message), None) => ResultView::Error(message),
        (_, Some(recipe)) => ResultView::Recipe(recipe),
        (None, None) => ResultView::Idle,
    }
}

/// Render the view as plain text for a terminal
pub fn render_text(view: &ResultView<'_>) -> String {
    match view {
        ResultView::Loading => LOADING_MESSAGE.to_string(),
        ResultView::Error(message) => format!("Error: {message}"),
        ResultView::Idle => format!("{IDLE_TITLE}\n{IDLE_MESSAGE}"),
        ResultView::Recipe(recipe) => match &recipe.error {
            Some(error) => format!("Oops!\n{error}"),
            None => render_recipe_text(recipe),
        },
    }
}

fn render_recipe_text(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.recipe_name);
    let _ = writeln!(out, "{}", recipe.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Prep Time: {}", recipe.prep_time);
    let _ = writeln!(out, "Cook Time: {}", recipe.cook_time);
    let _ = writeln!(out, "Servings:  {}", recipe.servings);
    let _ = writeln!(out);
    let _ = writeln!(out, "Ingredients");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {ingredient}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Instructions");
    for (index, instruction) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  Step {}: {}", index + 1, instruction);
    }
    out.truncate(out.trim_end().len());
    out
}

/// Render the view as an HTML fragment. All recipe text is escaped.
pub fn render_html(view: &ResultView<'_>) -> String {
    match view {
        ResultView::Loading => {
            format!(r#"<div class="loading"><p>{LOADING_MESSAGE}</p></div>"#)
        }
        ResultView::Error(message) => {
            format!(r#"<p class="error">{}</p>"#, encode_text(message))
        }
        ResultView::Idle => format!(
            r#"<div class="placeholder"><h2>{IDLE_TITLE}</h2><p>{IDLE_MESSAGE}</p></div>"#
        ),
        ResultView::Recipe(recipe) => match &recipe.error {
            Some(error) => format!(
                r#"<div class="recipe-card"><h2>Oops!</h2><p>{}</p></div>"#,
                encode_text(error)
            ),
            None => render_recipe_html(recipe),
        },
    }
}

fn render_recipe_html(recipe: &Recipe) -> String {
    let mut out = String::from(r#"<div class="recipe-card">"#);
    let _ = write!(
        out,
        "<h1>{}</h1><p>{}</p>",
        encode_text(&recipe.recipe_name),
        encode_text(&recipe.description)
    );
    let _ = write!(
        out,
        "<dl class=\"timing\">\
         <dt>Prep Time</dt><dd>{}</dd>\
         <dt>Cook Time</dt><dd>{}</dd>\
         <dt>Servings</dt><dd>{}</dd>\
         </dl>",
        encode_text(&recipe.prep_time),
        encode_text(&recipe.cook_time),
        encode_text(&recipe.servings)
    );

    out.push_str("<h2>Ingredients</h2><ul>");
    for ingredient in &recipe.ingredients {
        let _ = write!(out, "<li>{}</li>", encode_text(ingredient));
    }
    out.push_str("</ul><h2>Instructions</h2><ol>");
    for (index, instruction) in recipe.instructions.iter().enumerate() {
        let _ = write!(
            out,
            "<li><strong>Step {}:</strong> {}</li>",
            index + 1,
            encode_text(instruction)
        );
    }
    out.push_str("</ol></div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            recipe_name: "Mac & Cheese".to_string(),
            description: "Creamy <and> cheesy".to_string(),
            prep_time: "5 minutes".to_string(),
            cook_time: "15 minutes".to_string(),
            servings: "2".to_string(),
            ingredients: vec!["200g macaroni".to_string(), "100g cheddar".to_string()],
            instructions: vec!["Boil pasta.".to_string(), "Stir in cheese.".to_string()],
            error: None,
        }
    }

    #[test]
    fn test_loading_wins() {
        let recipe = sample_recipe();
        assert_eq!(
            result_view(true, Some("boom"), Some(&recipe)),
            ResultView::Loading
        );
    }

    #[test]
    fn test_error_only_without_recipe() {
        assert_eq!(result_view(false, Some("boom"), None), ResultView::Error("boom"));

        let recipe = Recipe::with_error("Not enough ingredients");
        assert_eq!(
            result_view(false, Some("boom"), Some(&recipe)),
            ResultView::Recipe(&recipe)
        );
    }

    #[test]
    fn test_idle() {
        assert_eq!(result_view(false, None, None), ResultView::Idle);
        assert!(render_text(&ResultView::Idle).contains(IDLE_TITLE));
    }

    #[test]
    fn test_render_text_recipe() {
        let recipe = sample_recipe();
        let text = render_text(&ResultView::Recipe(&recipe));
        assert!(text.starts_with("Mac & Cheese\n"));
        assert!(text.contains("Prep Time: 5 minutes"));
        assert!(text.contains("Cook Time: 15 minutes"));
        assert!(text.contains("  - 200g macaroni\n  - 100g cheddar"));
        assert!(text.ends_with("  Step 1: Boil pasta.\n  Step 2: Stir in cheese."));
    }

    #[test]
    fn test_render_text_error_recipe() {
        let recipe = Recipe::with_error("Add at least one vegetable.");
        let text = render_text(&ResultView::Recipe(&recipe));
        assert_eq!(text, "Oops!\nAdd at least one vegetable.");
    }

    #[test]
    fn test_render_html_escapes() {
        let recipe = sample_recipe();
        let html = render_html(&ResultView::Recipe(&recipe));
        assert!(html.contains("<h1>Mac &amp; Cheese</h1>"));
        assert!(html.contains("Creamy &lt;and&gt; cheesy"));
        assert!(html.contains(
            r#"<dl class="timing"><dt>Prep Time</dt><dd>5 minutes</dd><dt>Cook Time</dt>"#
        ));
        assert!(html.contains("<li><strong>Step 2:</strong> Stir in cheese.</li>"));

        let error = render_html(&ResultView::Error("<script>"));
        assert_eq!(error, r#"<p class="error">&lt;script&gt;</p>"#);
    }
}
