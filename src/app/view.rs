// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The watch page is rendered region by region from the typed visibility
//! state, with the settings panel joining the row only while it is flush
//! right. A hidden region is simply not rendered.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::player::{self, Playhead};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::link_bar;
use crate::ui::settings_panel;
use crate::ui::state::{Region, SectionVisibility};
use iced::{
    alignment::Horizontal,
    widget::{button, container, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visibility: &'a SectionVisibility,
    pub panel_open: bool,
    pub stream_title: &'a str,
    pub playhead: &'a Playhead,
    pub link_bar: &'a link_bar::State,
}

/// Renders the watch page, with the settings panel when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let settings_button = button(
        Text::new(ctx.i18n.tr("settings-button-label")).size(typography::CAPTION),
    )
    .on_press(Message::ToggleSettingsPanel)
    .padding(spacing::XS);

    let top_bar = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(settings_button)
        .padding(spacing::SM)
        .width(Length::Fill);

    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill);

    if !ctx.visibility.is_hidden(Region::Logo) {
        page = page.push(Text::new(ctx.i18n.tr("logo-wordmark")).size(typography::TITLE_LG));
    }

    if !ctx.visibility.is_hidden(Region::Title) {
        page = page.push(Text::new(ctx.stream_title).size(typography::TITLE));
    }

    // The player pane is never toggled; only its position changes.
    page = page.push(player_pane(&ctx));

    if !ctx.visibility.is_hidden(Region::Details) {
        page = page.push(details(&ctx));
    }

    let content = Column::new()
        .push(top_bar)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.panel_open {
        let panel = Container::new(
            settings_panel::view(settings_panel::ViewContext {
                i18n: ctx.i18n,
                visibility: ctx.visibility,
            })
            .map(Message::SettingsPanel),
        )
        .width(Length::Fixed(sizing::SETTINGS_PANEL_WIDTH))
        .height(Length::Fill)
        .style(container::bordered_box);

        Row::new().push(content).push(panel).into()
    } else {
        content.into()
    }
}

fn player_pane<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let position = Text::new(format!(
        "{} {}",
        ctx.i18n.tr("playhead-label"),
        player::format_timestamp(ctx.playhead.position_secs())
    ))
    .size(typography::BODY);

    let hint = Text::new(ctx.i18n.tr("seek-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Container::new(
        Column::new()
            .push(position)
            .push(hint)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(container::bordered_box)
    .into()
}

fn details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("details-heading")).size(typography::BODY);

    let link_bar = ctx.link_bar.view(ctx.i18n).map(Message::LinkBar);

    let hint = Text::new(ctx.i18n.tr("details-share-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .push(heading)
        .push(link_bar)
        .push(hint)
        .spacing(spacing::SM)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_with_panel_closed_and_open() {
        let i18n = I18n::default();
        let visibility = SectionVisibility::new();
        let playhead = Playhead::new();
        let link_bar = link_bar::State::new("https://example.org/watch/abc".to_string());

        for panel_open in [false, true] {
            let _element = view(ViewContext {
                i18n: &i18n,
                visibility: &visibility,
                panel_open,
                stream_title: "abc",
                playhead: &playhead,
                link_bar: &link_bar,
            });
            // Smoke test to ensure the view renders without panicking.
        }
    }

    #[test]
    fn view_renders_with_all_regions_hidden() {
        let i18n = I18n::default();
        let mut visibility = SectionVisibility::new();
        visibility.set_hide_metadata(true);
        visibility.set_simple_view(true);
        let playhead = Playhead::new();
        let link_bar = link_bar::State::new(String::new());

        let _element = view(ViewContext {
            i18n: &i18n,
            visibility: &visibility,
            panel_open: false,
            stream_title: "abc",
            playhead: &playhead,
            link_bar: &link_bar,
        });
    }
}
