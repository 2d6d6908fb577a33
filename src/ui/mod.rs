//! UI module for rendering the TUI

mod contact;
mod home;
mod layout;
mod toast;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Nav tabs on top, status bar at the bottom, content between
    let (nav_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_nav(frame, nav_area, app);

    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // The toast overlays everything else
    if let Some(notification) = app.notifier.current() {
        toast::draw(frame, area, notification);
    }
}
