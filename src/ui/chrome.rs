//! Shared page chrome of the booking pages
//!
//! Every page carries the same navigation bar and footer, and reuses one
//! modal element whose ids are fixed so scripts can bind to the buttons.

use std::fmt::Write;

/// Id of the generated modal container
pub const MODAL_ID: &str = "wDivGeneratedModal";
/// Id of the confirm button of a prompt modal
pub const MODAL_YES_BUTTON_ID: &str = "wGeneratedModalYesButton";
/// Id of the cancel button of a prompt modal
pub const MODAL_NO_BUTTON_ID: &str = "wGeneratedModalNoButton";
/// Id of the close button shared by both modals
pub const MODAL_CLOSE_BUTTON_ID: &str = "wGeneratedModalCloseButton";

/// Pages linked from the navigation bar, as (href, label)
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("homepage.html", "Homepage"),
    ("prenotazione.html", "Prenotazione"),
    ("ricerca.html", "Ricerca"),
];

/// Last segment of a request path
///
/// ```
/// use labkit::ui::chrome::page_name;
///
/// assert_eq!(page_name("/lab/ricerca.html"), "ricerca.html");
/// assert_eq!(page_name("/lab/"), "");
/// ```
pub fn page_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Navigation bar with the link to `active_page` marked active
///
/// `active_page` is compared against each href exactly; a page that is
/// not linked leaves every item inactive.
pub fn navbar(active_page: &str) -> String {
    let mut items = String::new();
    for (href, label) in NAV_LINKS {
        let class = if href == active_page {
            "nav-item active"
        } else {
            "nav-item"
        };
        let _ = write!(
            items,
            r#"
        <li class="{class}">
          <a class="nav-link" href="{href}">{label}</a>
        </li>"#
        );
    }

    format!(
        r##"<nav class="navbar navbar-expand-lg navbar-dark bg-dark fixed-top">
  <div class="container">
    <a class="navbar-brand fw-bold" href="#"><i class="fas fa-vials"></i> L.A.B.</a>
    <button class="navbar-toggler" type="button" data-toggle="collapse" data-target="#wDivNavbar">
      <span class="navbar-toggler-icon"></span>
    </button>
    <div class="collapse navbar-collapse justify-content-end" id="wDivNavbar">
      <ul class="navbar-nav">{items}
      </ul>
    </div>
  </div>
</nav>"##
    )
}

/// Page footer
pub fn footer() -> String {
    r#"<footer class="footer mt-auto py-1 bg-light">
  <div class="container text-center">
    <span class="text-muted">&copy; <b>L.A.B. Laboratorio Analisi</b></span>
  </div>
</footer>"#
        .to_string()
}

/// Modal asking the user to confirm `message`
///
/// The message is HTML-escaped. Use [`prompt_modal_html`] to pass markup.
pub fn prompt_modal(message: &str) -> String {
    prompt_modal_html(&escape_html(message))
}

/// Modal asking the user to confirm `body`, inserted as raw HTML
///
/// `body` must be trusted markup.
pub fn prompt_modal_html(body: &str) -> String {
    let footer = format!(
        r#"
      <div class="modal-footer">
        <div class="row justify-content-between">
          <div class="col-6">
            <button id="{MODAL_NO_BUTTON_ID}" type="button" class="btn btn-secondary fw-bold w-100"><i class="fas fa-times"></i></button>
          </div>
          <div class="col-6">
            <button id="{MODAL_YES_BUTTON_ID}" type="button" class="btn btn-success fw-bold w-100"><i class="fas fa-check"></i></button>
          </div>
        </div>
      </div>"#
    );
    modal(body, &footer)
}

/// Modal showing `message` with only a close button
///
/// The message is HTML-escaped. Use [`info_modal_html`] to pass markup.
pub fn info_modal(message: &str) -> String {
    info_modal_html(&escape_html(message))
}

/// Modal showing `body`, inserted as raw HTML, with only a close button
pub fn info_modal_html(body: &str) -> String {
    modal(body, "")
}

fn modal(body: &str, footer: &str) -> String {
    format!(
        r#"<div class="modal fade" id="{MODAL_ID}" tabindex="-1" role="dialog" aria-hidden="true">
  <div class="modal-dialog modal-dialog-centered" role="document">
    <div class="modal-content">
      <div class="modal-header">
        <h5 class="modal-title" hidden>Conferma</h5>
        <button id="{MODAL_CLOSE_BUTTON_ID}" type="button" class="btn btn-light w-100"><i class="fas fa-times"></i></button>
      </div>
      <div class="modal-body">{body}</div>{footer}
    </div>
  </div>
</div>"#
    )
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
