//! Star rating primitive
//!
//! Renders a row of star outlines with iced's Canvas. Every star is its own
//! canvas cell so the partial fill is a clip anchored at the cell's origin.
//! The cells share the row layout, which lets a drag that started on one star
//! keep updating the rating across the whole row.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use std::rc::Rc;

use iced::widget::canvas::{self, Frame, Geometry, LineJoin, Path, Program, Stroke};
use iced::widget::{Canvas, Row};
use iced::{Color, Element, Event, Point, Rectangle, Renderer, Theme, mouse, touch};

use crate::features::star::{
    FillMode, PathCommand, RatingLayout, StarGeometry, StarOutline, rating_from_position,
    star_fill_levels,
};

type Callback<'a, Message> = Rc<dyn Fn(f32) -> Message + 'a>;

/// Convert a star outline into a canvas path
pub fn outline_path(outline: &StarOutline) -> Path {
    Path::new(|builder| {
        for command in outline.commands() {
            match *command {
                PathCommand::MoveTo(point) => builder.move_to(point),
                PathCommand::LineTo(point) => builder.line_to(point),
                PathCommand::QuadTo { control, to } => builder.quadratic_curve_to(control, to),
                PathCommand::Close => builder.close(),
            }
        }
    })
}

/// Row of stars showing a rating, optionally editable by touch or mouse
pub struct StarRating<'a, Message> {
    rating: f32,
    layout: RatingLayout,
    geometry: StarGeometry,
    fill_mode: FillMode,
    fill_color: Color,
    empty_color: Option<Color>,
    border: Option<(f32, Color)>,
    interactive: bool,
    on_change: Option<Callback<'a, Message>>,
    on_finish: Option<Callback<'a, Message>>,
}

impl<'a, Message> StarRating<'a, Message> {
    pub fn new(rating: f32) -> Self {
        Self {
            rating,
            layout: RatingLayout::default(),
            geometry: StarGeometry::default(),
            fill_mode: FillMode::default(),
            fill_color: crate::ui::theme::STAR_FILL,
            empty_color: None,
            border: None,
            interactive: true,
            on_change: None,
            on_finish: None,
        }
    }

    pub fn layout(mut self, layout: RatingLayout) -> Self {
        self.layout = layout.sanitized();
        self
    }

    /// Star shape; its size is replaced by the layout's star size
    pub fn geometry(mut self, geometry: StarGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn fill_mode(mut self, mode: FillMode) -> Self {
        self.fill_mode = mode;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn empty_color(mut self, color: Color) -> Self {
        self.empty_color = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some((width, color));
        self
    }

    /// Ignore touch and mouse input while `false`
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// `on_change` receives every new rating during a drag
    pub fn on_change(mut self, on_change: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    /// Called with the final rating when the touch or button is released
    pub fn on_finish(mut self, on_finish: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_finish = Some(Rc::new(on_finish));
        self
    }

    /// Callbacks handed to the cells; none while input is disabled
    fn active_callbacks(
        &self,
    ) -> (Option<Callback<'a, Message>>, Option<Callback<'a, Message>>) {
        if self.interactive {
            (self.on_change.clone(), self.on_finish.clone())
        } else {
            (None, None)
        }
    }
}

impl<'a, Message: 'a> From<StarRating<'a, Message>> for Element<'a, Message> {
    fn from(rating: StarRating<'a, Message>) -> Self {
        let layout = rating.layout;
        let outline = StarGeometry {
            size: layout.star_size,
            ..rating.geometry
        }
        .rebuild();
        let levels = star_fill_levels(rating.rating, layout.star_count, rating.fill_mode);
        let last = layout.star_count.saturating_sub(1);
        let (on_change, on_finish) = rating.active_callbacks();

        let cells = levels.into_iter().enumerate().map(|(index, level)| {
            let width = if index == last {
                layout.star_size
            } else {
                layout.stride()
            };

            let cell: Element<'a, Message> = Canvas::new(StarCell {
                index,
                level,
                outline: outline.clone(),
                layout,
                fill_mode: rating.fill_mode,
                fill_color: rating.fill_color,
                empty_color: rating.empty_color,
                border: rating.border,
                on_change: on_change.clone(),
                on_finish: on_finish.clone(),
            })
            .width(width)
            .height(layout.star_size)
            .into();
            cell
        });

        Row::with_children(cells).spacing(0).into()
    }
}

/// Drag state of a single star cell
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    dragging: bool,
    rating: Option<f32>,
}

struct StarCell<'a, Message> {
    index: usize,
    level: f32,
    outline: StarOutline,
    layout: RatingLayout,
    fill_mode: FillMode,
    fill_color: Color,
    empty_color: Option<Color>,
    border: Option<(f32, Color)>,
    on_change: Option<Callback<'a, Message>>,
    on_finish: Option<Callback<'a, Message>>,
}

impl<Message> StarCell<'_, Message> {
    /// Rating under an absolute position, measured from the row's left edge
    fn rating_at(&self, position: Point, bounds: Rectangle) -> f32 {
        let x = self.layout.star_origin(self.index).x + (position.x - bounds.x);
        rating_from_position(x, &self.layout, self.fill_mode)
    }

    fn drag_to(
        &self,
        state: &mut DragState,
        position: Point,
        bounds: Rectangle,
    ) -> Option<canvas::Action<Message>> {
        let rating = self.rating_at(position, bounds);
        if state.rating == Some(rating) {
            return Some(canvas::Action::capture());
        }
        state.rating = Some(rating);

        let action = match &self.on_change {
            Some(on_change) => canvas::Action::publish(on_change(rating)),
            None => canvas::Action::request_redraw(),
        };
        Some(action.and_capture())
    }

    fn release(&self, state: &mut DragState) -> Option<canvas::Action<Message>> {
        state.dragging = false;
        let rating = state.rating.take();

        let action = match (&self.on_finish, rating) {
            (Some(on_finish), Some(rating)) => {
                tracing::debug!("Rating finished at {}", rating);
                canvas::Action::publish(on_finish(rating))
            }
            _ => canvas::Action::request_redraw(),
        };
        Some(action.and_capture())
    }
}

impl<Message> Program<Message> for StarCell<'_, Message> {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if self.on_change.is_none() && self.on_finish.is_none() {
            return None;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                state.dragging = true;
                self.drag_to(state, position, bounds)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(*position) =>
            {
                state.dragging = true;
                self.drag_to(state, *position, bounds)
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if state.dragging => {
                let position = cursor.position()?;
                self.drag_to(state, position, bounds)
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) if state.dragging => {
                self.drag_to(state, *position, bounds)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. })
                if state.dragging =>
            {
                self.release(state)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let path = outline_path(&self.outline);

        if self.level >= 1.0 {
            frame.fill(&path, self.fill_color);
        } else {
            let empty = self
                .empty_color
                .unwrap_or_else(|| crate::ui::theme::star_empty(theme));
            frame.fill(&path, empty);

            if self.level > 0.0 {
                frame.with_clip(self.outline.fill_clip(self.level), |frame| {
                    frame.fill(&path, self.fill_color);
                });
            }
        }

        if let Some((width, color)) = self.border {
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(width)
                    .with_color(color)
                    .with_line_join(LineJoin::Round),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let interactive = self.on_change.is_some() || self.on_finish.is_some();
        if interactive && (state.dragging || cursor.is_over(bounds)) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Create a star rating element
pub fn star_rating<'a, Message>(rating: f32) -> StarRating<'a, Message> {
    StarRating::new(rating)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn cell(index: usize, mode: FillMode) -> StarCell<'static, ()> {
        let layout = RatingLayout::new(5, 40.0, 10.0);
        StarCell {
            index,
            level: 0.0,
            outline: StarGeometry::new(40.0).rebuild(),
            layout,
            fill_mode: mode,
            fill_color: Color::BLACK,
            empty_color: None,
            border: None,
            on_change: None,
            on_finish: None,
        }
    }

    #[test]
    fn test_cell_maps_position_onto_row() {
        let bounds = Rectangle::new(Point::new(100.0, 20.0), iced::Size::new(50.0, 40.0));

        // Middle of the third star
        let third = cell(2, FillMode::Precise);
        assert_eq!(third.rating_at(Point::new(120.0, 30.0), bounds), 2.5);

        // Drag left of the row from the first star
        let first = cell(0, FillMode::Precise);
        assert_eq!(first.rating_at(Point::new(40.0, 30.0), bounds), 0.0);
    }

    #[test]
    fn test_drag_publishes_only_on_change() {
        let mut star = cell(0, FillMode::Full);
        star.on_change = Some(Rc::new(|_: f32| ()));
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(50.0, 40.0));
        let mut state = DragState::default();

        assert!(star.drag_to(&mut state, Point::new(30.0, 10.0), bounds).is_some());
        assert_eq!(state.rating, Some(1.0));

        star.drag_to(&mut state, Point::new(32.0, 10.0), bounds);
        assert_eq!(state.rating, Some(1.0));

        star.release(&mut state);
        assert!(!state.dragging);
        assert_eq!(state.rating, None);
    }

    fn press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn moved(position: Point) -> Event {
        Event::Mouse(mouse::Event::CursorMoved { position })
    }

    #[test]
    fn test_release_reports_final_rating_once() {
        let finished = Rc::new(RefCell::new(Vec::new()));
        let mut star = cell(0, FillMode::Full);
        let recorder = Rc::clone(&finished);
        star.on_finish = Some(Rc::new(move |rating: f32| recorder.borrow_mut().push(rating)));

        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(50.0, 40.0));
        let at = |x: f32| mouse::Cursor::Available(Point::new(x, 10.0));
        let mut state = DragState::default();

        assert!(star.update(&mut state, &press(), bounds, at(30.0)).is_some());
        assert!(star
            .update(&mut state, &moved(Point::new(32.0, 10.0)), bounds, at(32.0))
            .is_some());
        assert!(star.update(&mut state, &release(), bounds, at(32.0)).is_some());
        assert_eq!(*finished.borrow(), vec![1.0]);

        // Release without a gesture in progress
        assert!(star.update(&mut state, &release(), bounds, at(32.0)).is_none());
        assert_eq!(*finished.borrow(), vec![1.0]);
    }

    #[test]
    fn test_press_outside_cell_is_ignored() {
        let finished = Rc::new(RefCell::new(Vec::new()));
        let mut star = cell(0, FillMode::Precise);
        let recorder = Rc::clone(&finished);
        star.on_finish = Some(Rc::new(move |rating: f32| recorder.borrow_mut().push(rating)));

        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(50.0, 40.0));
        let outside = mouse::Cursor::Available(Point::new(80.0, 10.0));
        let mut state = DragState::default();

        assert!(star.update(&mut state, &press(), bounds, outside).is_none());
        assert!(star.update(&mut state, &release(), bounds, outside).is_none());
        assert!(finished.borrow().is_empty());
    }

    #[test]
    fn test_non_interactive_cell_ignores_input() {
        let star = cell(0, FillMode::Full);
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(50.0, 40.0));
        let cursor = mouse::Cursor::Available(Point::new(30.0, 10.0));
        let mut state = DragState::default();

        assert!(star.update(&mut state, &press(), bounds, cursor).is_none());
        assert!(!state.dragging);
        assert_eq!(
            star.mouse_interaction(&state, bounds, cursor),
            mouse::Interaction::default()
        );
    }

    #[test]
    fn test_interactive_false_drops_callbacks() {
        let rating = StarRating::<()>::new(2.0)
            .interactive(false)
            .on_change(|_| ())
            .on_finish(|_| ());

        let (on_change, on_finish) = rating.active_callbacks();
        assert!(on_change.is_none());
        assert!(on_finish.is_none());

        let rating = StarRating::<()>::new(2.0).on_finish(|_| ());
        let (on_change, on_finish) = rating.active_callbacks();
        assert!(on_change.is_none());
        assert!(on_finish.is_some());
    }
}
