// Drag capability
//
// Tracks the single active drag in egui memory. Drop areas report their
// target tag while the pointer is over them; the tag under the pointer at
// release is what the board receives.

use egui::{Context, Id, Pos2, Rect};

use crate::services::placement::DraggedItem;

#[derive(Clone, Debug)]
pub struct DragContext {
    pub item_id: String,
    /// Shown in the drag overlay
    pub title: String,
    pub pointer_pos: Option<Pos2>,
    /// Tag of the drop area under the pointer this frame (`time-H-M` / `list-ID`)
    pub hovered_target: Option<String>,
}

impl DragContext {
    pub fn from_item(item: &DraggedItem) -> Self {
        Self {
            item_id: item.id().to_string(),
            title: item.title().to_string(),
            pointer_pos: None,
            hovered_target: None,
        }
    }
}

pub struct DragManager;

impl DragManager {
    fn storage_id() -> Id {
        Id::new("planner_item_drag_state")
    }

    /// Start a drag. Ignored (returns false) if one is already in progress.
    pub fn begin(ctx: &Context, context: DragContext) -> bool {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if mem.data.get_temp::<DragContext>(id).is_some() {
                return false;
            }
            log::debug!("Drag started for '{}'", context.item_id);
            mem.data.insert_temp(id, context);
            true
        })
    }

    pub fn active(ctx: &Context) -> Option<DragContext> {
        ctx.memory(|mem| mem.data.get_temp::<DragContext>(Self::storage_id()))
    }

    pub fn is_active(ctx: &Context) -> bool {
        Self::active(ctx).is_some()
    }

    pub fn is_dragging(ctx: &Context, item_id: &str) -> bool {
        Self::active(ctx).map_or(false, |c| c.item_id == item_id)
    }

    /// Forget the previous frame's hover; drop areas re-report it while rendering.
    pub fn reset_hover(ctx: &Context) {
        let id = Self::storage_id();
        let pointer = ctx.pointer_latest_pos();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_temp::<DragContext>(id) {
                state.hovered_target = None;
                state.pointer_pos = pointer;
                mem.data.insert_temp(id, state);
            }
        });
    }

    /// Record `target_tag` as hovered if the pointer is inside `rect`.
    pub fn update_hover(ctx: &Context, target_tag: String, rect: Rect) -> bool {
        let Some(pointer) = ctx.pointer_latest_pos() else {
            return false;
        };
        if !rect.contains(pointer) {
            return false;
        }

        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_temp::<DragContext>(id) {
                state.hovered_target = Some(target_tag);
                state.pointer_pos = Some(pointer);
                mem.data.insert_temp(id, state);
                true
            } else {
                false
            }
        })
    }

    /// Whether the active drag is currently hovering the given tag
    pub fn is_hovering(ctx: &Context, target_tag: &str) -> bool {
        Self::active(ctx)
            .and_then(|c| c.hovered_target)
            .map_or(false, |t| t == target_tag)
    }

    /// End the drag and hand back its final state
    pub fn finish(ctx: &Context) -> Option<DragContext> {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            let current = mem.data.get_temp::<DragContext>(id);
            if current.is_some() {
                mem.data.remove::<DragContext>(id);
            }
            current
        })
    }

    pub fn cancel(ctx: &Context) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<DragContext>(Self::storage_id());
        });
    }
}
