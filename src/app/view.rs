//! Application view rendering

use std::ops::RangeInclusive;

use iced::widget::{
    Space, button, column, container, pick_list, row, slider, text, toggler,
};
use iced::{Alignment, Element, Fill};

use starhud::features::{FillMode, RatingLayout};
use starhud::ui::primitives::{star_rating, view_loading, view_success};
use starhud::ui::theme;

use super::App;
use super::message::{Message, Page};
use super::update::rating::MAX_CORNER_RADIUS;

/// Side of the large single star preview
const PREVIEW_SIZE: f32 = 150.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let tabs: Vec<Element<'_, Message>> = Page::all()
            .into_iter()
            .map(|page| {
                button(text(page.title()).size(14))
                    .padding([6, 16])
                    .style(theme::nav_tab(page == self.page))
                    .on_press(Message::Navigate(page))
                    .into()
            })
            .collect();
        let nav = row(tabs).spacing(8);

        let content = match self.page {
            Page::Rating => self.view_rating_page(),
            Page::Hud => self.view_hud_page(),
        };

        let status = text(self.status.clone().unwrap_or_default())
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            });
        let footer = row![
            button(text("Save").size(14))
                .padding([8, 20])
                .style(theme::primary_button)
                .on_press(Message::SaveSettings),
            status,
            Space::new().width(Fill),
            toggler(self.settings.dark_mode)
                .label("Dark mode")
                .on_toggle(Message::DarkModeToggled)
                .size(24),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        container(column![nav, content, footer].spacing(24).padding(24))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }

    fn view_rating_page(&self) -> Element<'_, Message> {
        let settings = &self.settings.rating;

        let stars = star_rating(self.rating)
            .layout(settings.layout())
            .geometry(settings.geometry())
            .fill_mode(settings.fill_mode)
            .interactive(settings.interactive)
            .on_change(Message::RatingChanged)
            .on_finish(Message::RatingFinished);

        let preview = star_rating::<Message>(1.0)
            .layout(RatingLayout::new(1, PREVIEW_SIZE, 0.0))
            .geometry(settings.geometry())
            .border(1.0, theme::STAR_FILL);

        let finished = match self.last_finished {
            Some(rating) => format!("Last rating: {:.2}", rating),
            None => "Drag across the stars to rate".to_string(),
        };

        let controls = column![
            labeled_slider(
                "Outer corner radius",
                0.0..=MAX_CORNER_RADIUS,
                settings.outer_corner_radius,
                0.5,
                Message::OuterRadiusChanged,
            ),
            labeled_slider(
                "Inner corner radius",
                0.0..=MAX_CORNER_RADIUS,
                settings.inner_corner_radius,
                0.5,
                Message::InnerRadiusChanged,
            ),
            labeled_slider(
                "Radius scale",
                0.0..=1.0,
                settings.radius_scale,
                0.01,
                Message::RadiusScaleChanged,
            ),
            labeled_slider(
                "Rating",
                0.0..=settings.star_count as f32,
                self.rating,
                0.01,
                Message::RatingChanged,
            ),
            row![
                text("Fill mode").size(14).width(160),
                pick_list(FillMode::all(), Some(settings.fill_mode), Message::FillModeSelected)
                    .text_size(14)
                    .padding([8, 16])
                    .style(theme::settings_pick_list),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        ]
        .spacing(12);

        panel(column![stars, text(finished).size(14), preview, controls].spacing(20))
    }

    fn view_hud_page(&self) -> Element<'_, Message> {
        let hud = &self.hud;

        let loading_side = hud.spinner.style.radius.max(0.0);
        let loading: Element<'_, Message> = if hud.spinner.is_running() {
            view_loading(&hud.spinner, hud.loading_fade.opacity())
        } else {
            Space::new().width(loading_side).height(loading_side).into()
        };

        let success_side = hud.success.style.radius.max(0.0);
        let success: Element<'_, Message> = if hud.success.is_running() {
            view_success(&hud.success, hud.success_fade.opacity())
        } else {
            Space::new().width(success_side).height(success_side).into()
        };

        let loading_panel = column![
            text("Loading").size(16),
            loading,
            row![
                button(text("Show").size(14))
                    .style(theme::primary_button)
                    .on_press(Message::ShowLoading),
                button(text("Hide").size(14))
                    .style(theme::secondary_button)
                    .on_press(Message::HideLoading),
            ]
            .spacing(8),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        let success_panel = column![
            text("Success").size(16),
            success,
            row![
                button(text("Show").size(14))
                    .style(theme::primary_button)
                    .on_press(Message::ShowSuccess),
                button(text("Hide").size(14))
                    .style(theme::secondary_button)
                    .on_press(Message::HideSuccess),
            ]
            .spacing(8),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        panel(row![loading_panel, success_panel].spacing(48))
    }
}

fn panel<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content).padding(24).style(theme::panel).into()
}

fn labeled_slider<'a>(
    label: &'a str,
    range: RangeInclusive<f32>,
    value: f32,
    step: f32,
    on_change: fn(f32) -> Message,
) -> Element<'a, Message> {
    row![
        text(label).size(14).width(160),
        slider(range, value, on_change).step(step).width(240),
        text(format!("{:.2}", value)).size(14).width(60),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
