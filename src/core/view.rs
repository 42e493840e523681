//! Server-rendered APOD view.
//!
//! The view is a small state machine driven by the lifecycle of the
//! `GetAPOD` query: it starts in [`ApodView::Loading`] when mounted and
//! settles in either [`ApodView::Error`] or [`ApodView::Loaded`]. The page is
//! sent in two chunks so the loading indicator reaches the browser before the
//! upstream call settles. Rendering uses plain string interpolation with HTML
//! escaping.

use crate::domain::model::Apod;

pub const HEADING: &str = "NASA Astronomy Picture of the Day";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const ERROR_MESSAGE: &str = "Whoops! An error occurred. Please refresh the page.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApodView {
    Loading,
    Error,
    Loaded(Apod),
}

impl ApodView {
    /// State right after the query has been dispatched.
    pub fn mount() -> Self {
        ApodView::Loading
    }

    /// Applies the outcome of the query. Only `Loading` transitions; a
    /// settled view needs a fresh mount to load again.
    pub fn resolve<E: std::fmt::Display>(self, outcome: Result<Apod, E>) -> Self {
        match self {
            ApodView::Loading => match outcome {
                Ok(apod) => ApodView::Loaded(apod),
                Err(e) => {
                    tracing::debug!("APOD view settled in error state: {}", e);
                    ApodView::Error
                }
            },
            settled => settled,
        }
    }

    /// Applies the executed `GetAPOD` query.
    ///
    /// Any error, or a null `getAPOD`, settles the view in `Error`.
    pub fn resolve_graphql(self, response: async_graphql::Response) -> Self {
        let outcome = if response.is_ok() {
            response
                .data
                .into_json()
                .map_err(|e| e.to_string())
                .and_then(|data| apod_from_data(&data))
        } else {
            Err(response
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_default())
        };
        self.resolve(outcome)
    }

    pub fn render(&self) -> String {
        match self {
            ApodView::Loading => format!("<p>{}</p>", LOADING_MESSAGE),
            ApodView::Error => format!("<p>{}</p>", ERROR_MESSAGE),
            ApodView::Loaded(apod) => format!(
                r#"<div class="container">
  <div class="container-item">
    <h1>{heading}</h1>
  </div>
  <div class="container-item">
    <h3>{title}</h3>
  </div>
  <div class="container-item">
    <img src="{hdurl}" alt="NASA APOD">
  </div>
  <div class="container-item">
    <p>{explanation}</p>
  </div>
</div>"#,
                heading = HEADING,
                title = html_escape(&apod.title),
                hdurl = html_escape(&apod.hdurl),
                explanation = html_escape(&apod.explanation),
            ),
        }
    }

    /// Opening chunk of the streamed page: layout and this view inside the
    /// `apod-loading` block.
    pub fn render_page_start(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{heading}</title>
    <style>
        {css}
    </style>
</head>
<body>
<div id="apod-loading">{body}</div>
"#,
            heading = HEADING,
            css = PAGE_CSS,
            body = self.render(),
        )
    }

    /// Closing chunk: hides the `apod-loading` block and appends this view.
    pub fn render_page_end(&self) -> String {
        format!(
            r#"<style>#apod-loading {{ display: none; }}</style>
{body}
</body>
</html>"#,
            body = self.render(),
        )
    }
}

fn apod_from_data(data: &serde_json::Value) -> Result<Apod, String> {
    let apod = data
        .get("getAPOD")
        .filter(|v| !v.is_null())
        .ok_or_else(|| "response has no data.getAPOD".to_string())?;

    serde_json::from_value(apod.clone()).map_err(|e| e.to_string())
}

const PAGE_CSS: &str = r#"
        body { margin: 0; font-family: sans-serif; background: #0b0d17; color: #e6e6e6; }
        .container { display: flex; flex-direction: column; align-items: center; padding: 2rem; }
        .container-item { max-width: 960px; text-align: center; }
        img { max-width: 100%; height: auto; }
        p { line-height: 1.6; }
"#;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
