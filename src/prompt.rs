/// Instruction appended to every modification prompt.
pub const MODIFY_INSTRUCTION: &str =
    "Modify the recipe by incorporating the suggested changes. Provide the updated recipe:";

/// Build the prompt for generating a recipe from ingredients.
///
/// The dietary preferences section is only present when preferences are non-empty.
pub fn build_generate_prompt(ingredients: &str, preferences: Option<&str>) -> String {
    match preferences.filter(|prefs| !prefs.is_empty()) {
        Some(prefs) => format!(
            "Ingredients:\n{ingredients}\n\nDietary Preferences:\n{prefs}\n\nRecipe:"
        ),
        None => format!("Ingredients:\n{ingredients}\n\nRecipe:"),
    }
}

/// Build the prompt for applying a suggested change to an existing recipe.
///
/// The suggestion stays on the same line as its label.
pub fn build_modify_prompt(recipe: &str, suggestion: &str) -> String {
    format!(
        "Original Recipe:\n{recipe}\n\nSuggested Modification: {suggestion}\n\n{MODIFY_INSTRUCTION}"
    )
}
