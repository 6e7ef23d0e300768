use ratatui::Frame;

use super::layout::WorkbenchLayout;
use super::Workbench;
use crate::kernel::{editor, Action};

mod chrome;
mod editor_pane;
mod overlays;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame) {
    let area = frame.area();
    workbench.area = area;
    let layout = WorkbenchLayout::compute(area, &workbench.store.state().ui.split);
    workbench.layout = Some(layout);
    workbench.sync_view_sizes(&layout);

    chrome::render_title(workbench, frame, &layout);
    chrome::render_activity_bar(workbench, frame, &layout);
    chrome::render_sidebar(workbench, frame, &layout);
    chrome::render_divider(workbench, frame, &layout);
    editor_pane::render_editor(workbench, frame, &layout);
    chrome::render_status(workbench, frame, &layout);

    overlays::render_context_menu(workbench, frame, &layout);
    overlays::render_input_dialog(workbench, frame, &layout);
    overlays::render_confirm_dialog(workbench, frame, &layout);
}

impl Workbench {
    /// Feeds the viewport sizes of this frame back into the store so scrolling and paging
    /// match what is on screen.
    fn sync_view_sizes(&mut self, layout: &WorkbenchLayout) {
        if layout.explorer.height > 0 {
            self.dispatch(Action::ExplorerSetViewHeight {
                height: usize::from(layout.explorer.height),
            });
        }

        let line_count = self
            .store
            .state()
            .active_node()
            .and_then(|node| node.content())
            .map_or(1, editor::line_count);
        let (_, text) = layout.editor_columns(line_count);
        if text.width > 0 && text.height > 0 {
            self.dispatch(Action::EditorSetViewSize {
                width: usize::from(text.width),
                height: usize::from(text.height),
            });
        }
    }
}
