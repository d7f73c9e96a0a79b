// SPDX-License-Identifier: MPL-2.0
//! Slide-in settings panel: visibility checkboxes and language selection.
//!
//! The panel owns no state of its own; the checkboxes render the typed
//! visibility state and every interaction is propagated to the parent as
//! an [`Event`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::SectionVisibility;
use iced::{
    widget::{button, checkbox, Button, Column, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visibility: &'a SectionVisibility,
}

/// Messages emitted by the settings panel.
#[derive(Debug, Clone)]
pub enum Message {
    HideMetadataToggled(bool),
    SimpleViewToggled(bool),
    LanguageSelected(LanguageIdentifier),
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    HideMetadataToggled(bool),
    SimpleViewToggled(bool),
    LanguageSelected(LanguageIdentifier),
    Close,
}

/// Process a settings panel message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::HideMetadataToggled(hidden) => Event::HideMetadataToggled(hidden),
        Message::SimpleViewToggled(simple) => Event::SimpleViewToggled(simple),
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::Close => Event::Close,
    }
}

/// Render the settings panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE);

    let hide_metadata = checkbox(ctx.visibility.hide_metadata())
        .label(ctx.i18n.tr("settings-hide-metadata"))
        .on_toggle(Message::HideMetadataToggled);

    let simple_view = checkbox(ctx.visibility.simple_view())
        .label(ctx.i18n.tr("settings-simple-view"))
        .on_toggle(Message::SimpleViewToggled);

    let mut language_selection_column = Column::new()
        .push(Text::new(ctx.i18n.tr("select-language-label")))
        .spacing(spacing::SM);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for specific translation for the language name, e.g., "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = ctx.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone() // Use raw locale if translation missing
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = ctx.i18n.current_locale() == locale;
        let mut language_button = Button::new(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }

        language_selection_column = language_selection_column.push(language_button);
    }

    let close_button = button(Text::new(ctx.i18n.tr("settings-close-button")))
        .on_press(Message::Close)
        .style(button::secondary);

    Column::new()
        .push(title)
        .push(hide_metadata)
        .push(simple_view)
        .push(language_selection_column)
        .push(close_button)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_forwards_toggles_as_events() {
        assert!(matches!(
            update(Message::HideMetadataToggled(true)),
            Event::HideMetadataToggled(true)
        ));
        assert!(matches!(
            update(Message::SimpleViewToggled(false)),
            Event::SimpleViewToggled(false)
        ));
        assert!(matches!(update(Message::Close), Event::Close));
    }

    #[test]
    fn update_forwards_language_selection() {
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        match update(Message::LanguageSelected(locale.clone())) {
            Event::LanguageSelected(selected) => assert_eq!(selected, locale),
            _ => panic!("expected LanguageSelected event"),
        }
    }

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let visibility = SectionVisibility::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            visibility: &visibility,
        });
        // Smoke test to ensure the view renders without panicking.
    }
}
