// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo.

use super::demo::Demo;

/// State touched by message handlers.
pub struct UpdateContext<'a> {
    pub demo: &'a mut Demo,
    pub clicks: &'a mut usize,
    pub active_tab: &'a mut usize,
}

pub fn handle_clear_badges(ctx: &mut UpdateContext<'_>) {
    ctx.demo.clear_all();
    tracing::debug!("cleared all badges");
}

/// Advances the click counter and applies the next value from each cycle.
pub fn handle_change_values(ctx: &mut UpdateContext<'_>) {
    *ctx.clicks = ctx.clicks.wrapping_add(1);
    ctx.demo.apply_cycle(*ctx.clicks);
    tracing::debug!(clicks = *ctx.clicks, "applied next badge values");
}

/// Activates a tab; clicks on the active tab or an unknown index are ignored.
pub fn handle_tab_pressed(ctx: &mut UpdateContext<'_>, index: usize) {
    if index == *ctx.active_tab || index >= ctx.demo.tabs().len() {
        return;
    }
    *ctx.active_tab = index;
    tracing::debug!(index, "activated tab");
}
