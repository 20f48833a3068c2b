//! Entry points used by the `counter` binary.

use tea_runtime::Program;
use tracing::info;

use crate::cli::{RenderArgs, RenderFormat};
use crate::config::Config;
use crate::error::Result;
use crate::view::ViewOptions;
use crate::widget::CounterWidget;

/// Build the widget described by `config`.
#[must_use]
pub fn widget_from_config(config: &Config) -> CounterWidget {
    CounterWidget::with_state(config.initial_state())
        .with_keymap(config.keymap.clone())
        .with_view_options(config.view_options())
}

/// Run the interactive widget until the user quits and return its final
/// state.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or an I/O error occurs
/// while running.
pub fn run_interactive(config: &Config) -> Result<CounterWidget> {
    let mut program = Program::new(widget_from_config(config));
    if config.alt_screen {
        program = program.with_alt_screen();
    }
    if config.mouse {
        program = program.with_mouse();
    }

    info!(
        start = config.start,
        mouse = config.mouse,
        alt_screen = config.alt_screen,
        "starting counter"
    );
    let widget = program.run()?;
    info!(count = widget.state().counter(), "counter exited");
    Ok(widget)
}

/// Apply the presses in `args` to a widget built from `config` and return
/// the requested rendering. Text formats are laid out without margins or
/// the key hint.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::error::Error::Json) if the element tree
/// cannot be encoded.
pub fn render_headless(config: &Config, args: &RenderArgs) -> Result<String> {
    let mut widget = CounterWidget::with_state(config.initial_state());
    for &action in &args.press {
        widget.apply(action);
    }

    let output = match args.format {
        RenderFormat::Plain => widget
            .with_view_options(ViewOptions::plain())
            .screen()
            .plain(),
        RenderFormat::Ansi => widget
            .with_view_options(ViewOptions {
                color: true,
                ..ViewOptions::plain()
            })
            .screen()
            .styled(),
        RenderFormat::Json => serde_json::to_string_pretty(&widget.element())?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ERROR_MESSAGE;
    use crate::state::{Action, CounterState};

    fn args(press: &[Action], format: RenderFormat) -> RenderArgs {
        RenderArgs {
            press: press.to_vec(),
            format,
        }
    }

    #[test]
    fn widget_follows_config() {
        let config = Config {
            start: 5,
            ..Config::default()
        };
        let widget = widget_from_config(&config);
        assert_eq!(widget.state(), CounterState::with_counter(5));
    }

    #[test]
    fn plain_render_after_presses() {
        let config = Config {
            start: 1,
            ..Config::default()
        };
        let out = render_headless(
            &config,
            &args(&[Action::Decrement, Action::Decrement], RenderFormat::Plain),
        )
        .unwrap();
        assert!(out.starts_with("The counter is currently 0\n"));
        assert!(out.ends_with(ERROR_MESSAGE));
    }

    #[test]
    fn plain_render_without_presses_has_no_error() {
        let out = render_headless(&Config::default(), &args(&[], RenderFormat::Plain)).unwrap();
        assert!(out.contains("The counter is currently 0"));
        assert!(!out.contains(ERROR_MESSAGE));
    }

    #[test]
    fn ansi_render_contains_escapes() {
        let out = render_headless(&Config::default(), &args(&[], RenderFormat::Ansi)).unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("Increment counter"));
    }

    #[test]
    fn json_render_is_the_element_tree() {
        let out = render_headless(
            &Config::default(),
            &args(&[Action::Increment], RenderFormat::Json),
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["test_id"], "component-app");
        assert_eq!(json["children"][0]["text"], "The counter is currently 1");
    }
}
