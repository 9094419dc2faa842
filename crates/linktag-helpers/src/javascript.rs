use crate::{LinkBehaviour, Popup};

const POST_FUNCTION: &str = "var f = document.createElement('form'); \
                             this.parentNode.appendChild(f); f.method = \
                             'POST'; f.action = this.href; f.submit();";

/// Escape text for a single- or double-quoted JavaScript string literal.
#[must_use]
pub fn escape_javascript(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut chars = text.chars().peekable();
  while let Some(c) = chars.next() {
    match c {
      '\\' => out.push_str("\\\\"),
      '\'' => out.push_str("\\'"),
      '"' => out.push_str("\\\""),
      '\r' => {
        if chars.peek() == Some(&'\n') {
          chars.next();
        }
        out.push_str("\\n");
      },
      '\n' => out.push_str("\\n"),
      _ => out.push(c),
    }
  }
  out
}

fn confirm_function(message: &str) -> String {
  format!("confirm('{}')", escape_javascript(message))
}

fn popup_function(popup: &Popup) -> String {
  match popup {
    Popup::Default => "window.open(this.href);".to_string(),
    Popup::Window { name, features } => {
      format!(
        "window.open(this.href,'{}','{}');",
        escape_javascript(name),
        escape_javascript(features)
      )
    },
  }
}

/// Build the `onclick` handler for a link, or `None` when the link has no
/// confirmation and no special behaviour.
pub(crate) fn onclick(
  confirm: Option<&str>,
  behaviour: &LinkBehaviour,
) -> Option<String> {
  let action = match behaviour {
    LinkBehaviour::Follow => None,
    LinkBehaviour::Popup(popup) => Some(popup_function(popup)),
    LinkBehaviour::Post => Some(POST_FUNCTION.to_string()),
  };

  match (confirm, action) {
    (Some(message), Some(action)) => {
      Some(format!(
        "if ({}) {{ {action} }};return false;",
        confirm_function(message)
      ))
    },
    (Some(message), None) => {
      Some(format!("return {};", confirm_function(message)))
    },
    (None, Some(action)) => Some(format!("{action}return false;")),
    (None, None) => None,
  }
}
