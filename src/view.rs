use crate::bookmarks::Bookmarks;
use crate::model::{Recipe, RecipeSummary};
use crate::pagination::PageNav;
use log::warn;
use std::io::{self, Write};

/// Default message shown when a recipe cannot be loaded.
pub const RECIPE_ERROR_MESSAGE: &str = "We could not find that recipe. Please try another one!";
/// Default message shown when a search returns nothing.
pub const NO_RESULTS_MESSAGE: &str = "No recipes found for your query! Please try again ;)";
/// Shown after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Recipe was successfully uploaded :)";
/// Shown in the bookmarks panel when it is empty.
pub const NO_BOOKMARKS_MESSAGE: &str = "No bookmarks yet. Find a nice recipe and bookmark it :)";

/// Rendering surface driven by the controller.
pub trait View {
    fn render_spinner(&mut self);

    fn render_error(&mut self, message: &str);

    fn render_message(&mut self, message: &str);

    fn render_recipe(&mut self, recipe: &Recipe);

    /// Render one page of results, marking `selected` if it is on it.
    fn render_results(&mut self, results: &[RecipeSummary], selected: Option<&str>);

    fn render_pagination(&mut self, nav: &PageNav);

    fn render_bookmarks(&mut self, bookmarks: &Bookmarks, selected: Option<&str>);
}

/// Format a quantity the way a cook reads it: `1 1/2` rather than `1.5`.
pub fn format_quantity(quantity: f64) -> String {
    const DENOMINATORS: [u32; 4] = [2, 3, 4, 8];
    const TOLERANCE: f64 = 0.01;

    let whole = quantity.trunc();
    let frac = quantity - whole;

    if frac.abs() < TOLERANCE {
        return format!("{}", whole as i64);
    }
    if 1.0 - frac < TOLERANCE {
        return format!("{}", whole as i64 + 1);
    }

    for den in DENOMINATORS {
        let num = (frac * f64::from(den)).round();
        if num > 0.0 && (frac - num / f64::from(den)).abs() < TOLERANCE {
            return if whole == 0.0 {
                format!("{}/{}", num as u32, den)
            } else {
                format!("{} {}/{}", whole as i64, num as u32, den)
            };
        }
    }

    let rounded = format!("{:.2}", quantity);
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Plain-text view writing to any [`Write`] sink, stdout by default.
pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render_spinner(&mut self) {
        self.emit("Loading...");
    }

    fn render_error(&mut self, message: &str) {
        self.emit(&format!("⚠ {}", message));
    }

    fn render_message(&mut self, message: &str) {
        self.emit(&format!("✓ {}", message));
    }

    fn render_recipe(&mut self, recipe: &Recipe) {
        let mut text = String::new();
        text.push_str(&format!("# {}", recipe.title));
        if recipe.bookmarked {
            text.push_str("  [bookmarked]");
        }
        if recipe.key.is_some() {
            text.push_str("  [yours]");
        }
        text.push('\n');
        text.push_str(&format!(
            "{} minutes · {} servings\n\n",
            recipe.cooking_time, recipe.servings
        ));
        text.push_str("Recipe ingredients:\n");
        for ing in &recipe.ingredients {
            let quantity = ing.quantity.map(format_quantity).unwrap_or_default();
            let line = [quantity.as_str(), ing.unit.as_str(), ing.description.as_str()]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            text.push_str(&format!("  ✓ {}\n", line));
        }
        text.push_str(&format!(
            "\nThis recipe was carefully designed and tested by {}.\nDirections: {}",
            recipe.publisher, recipe.source_url
        ));
        self.emit(&text);
    }

    fn render_results(&mut self, results: &[RecipeSummary], selected: Option<&str>) {
        if results.is_empty() {
            self.render_error(NO_RESULTS_MESSAGE);
            return;
        }
        let lines: Vec<String> = results.iter().map(|r| summary_line(r, selected)).collect();
        self.emit(&lines.join("\n"));
    }

    fn render_pagination(&mut self, nav: &PageNav) {
        if nav.is_empty() {
            return;
        }
        let prev = nav.prev.map(|p| format!("← Page {}", p)).unwrap_or_default();
        let next = nav.next.map(|p| format!("Page {} →", p)).unwrap_or_default();
        let position = format!("{}/{}", nav.current, nav.total_pages);
        self.emit(&format!("{:<12}{:^12}{:>12}", prev, position, next));
    }

    fn render_bookmarks(&mut self, bookmarks: &Bookmarks, selected: Option<&str>) {
        if bookmarks.is_empty() {
            self.render_message(NO_BOOKMARKS_MESSAGE);
            return;
        }
        let lines: Vec<String> = bookmarks
            .iter()
            .map(|r| summary_line(&RecipeSummary::from(r), selected))
            .collect();
        self.emit(&format!("Bookmarks:\n{}", lines.join("\n")));
    }
}

fn summary_line(summary: &RecipeSummary, selected: Option<&str>) -> String {
    let marker = if selected == Some(summary.id.as_str()) { ">" } else { " " };
    format!("{} #{}  {} ({})", marker, summary.id, summary.title, summary.publisher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.5), "1/2");
        assert_eq!(format_quantity(1.5), "1 1/2");
        assert_eq!(format_quantity(0.25), "1/4");
        assert_eq!(format_quantity(1.0 / 3.0), "1/3");
        assert_eq!(format_quantity(0.375), "3/8");
        assert_eq!(format_quantity(0.999), "1");
        assert_eq!(format_quantity(0.21), "0.21");
    }

    #[test]
    fn test_render_recipe() {
        let recipe = Recipe {
            id: "abc".to_string(),
            title: "Pizza".to_string(),
            publisher: "Closet Cooking".to_string(),
            source_url: "https://example.com/pizza".to_string(),
            image: String::new(),
            servings: 4,
            cooking_time: 45,
            ingredients: vec![
                Ingredient {
                    quantity: Some(1.5),
                    unit: "cups".to_string(),
                    description: "flour".to_string(),
                },
                Ingredient {
                    quantity: None,
                    unit: String::new(),
                    description: "salt".to_string(),
                },
            ],
            bookmarked: true,
            key: None,
        };

        let mut view = TerminalView::new(Vec::new());
        view.render_recipe(&recipe);
        let text = output(view);

        assert!(text.contains("# Pizza  [bookmarked]"));
        assert!(text.contains("45 minutes · 4 servings"));
        assert!(text.contains("✓ 1 1/2 cups flour"));
        assert!(text.contains("✓ salt"));
        assert!(text.contains("Closet Cooking"));
    }

    #[test]
    fn test_render_empty_results() {
        let mut view = TerminalView::new(Vec::new());
        view.render_results(&[], None);
        assert!(output(view).contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_render_results_marks_selected() {
        let results = vec![
            RecipeSummary {
                id: "a".to_string(),
                title: "Soup".to_string(),
                publisher: "P".to_string(),
                image: String::new(),
                key: None,
            },
            RecipeSummary {
                id: "b".to_string(),
                title: "Stew".to_string(),
                publisher: "P".to_string(),
                image: String::new(),
                key: None,
            },
        ];
        let mut view = TerminalView::new(Vec::new());
        view.render_results(&results, Some("b"));
        let text = output(view);
        assert!(text.contains("  #a  Soup (P)"));
        assert!(text.contains("> #b  Stew (P)"));
    }

    #[test]
    fn test_render_pagination() {
        let mut view = TerminalView::new(Vec::new());
        view.render_pagination(&PageNav::new(2, 25));
        let text = output(view);
        assert!(text.contains("← Page 1"));
        assert!(text.contains("Page 3 →"));
        assert!(text.contains("2/3"));
    }

    #[test]
    fn test_render_empty_bookmarks() {
        let mut view = TerminalView::new(Vec::new());
        view.render_bookmarks(&Bookmarks::new(), None);
        assert!(output(view).contains(NO_BOOKMARKS_MESSAGE));
    }
}
