use bevy::log::{debug, warn};

use crate::marker::{
    DEFAULT_MIDPOINT_RATIO, Marker, MarkerStop, Rgba, WHITE, clamp_unit, default_markers,
};

/// Spans narrower than this cannot host a draggable midpoint.
pub const MIN_MIDPOINT_SPAN: f32 = 0.0001;

/// The ordered set of gradient markers plus the selection that follows them.
///
/// Markers are always sorted ascending by position and there are never fewer than
/// two of them once [`MarkerCollection::delete_marker`] is the only way to remove
/// markers. Every operation that takes an id is a silent no-op when the id is
/// unknown. Ids are dense: any deletion renumbers the survivors `0..len` in
/// position order, so callers must re-resolve ids after structural changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCollection {
    markers: Vec<Marker>,
    selected_marker_id: i32,
    selected_midpoint_id: i32,
    marker_id_counter: i32,
}

impl Default for MarkerCollection {
    fn default() -> Self {
        let mut collection = Self {
            markers: default_markers(),
            selected_marker_id: 0,
            selected_midpoint_id: 0,
            marker_id_counter: 2,
        };
        collection.update_midpoints_pos();
        collection
    }
}

impl MarkerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from persisted stops. See [`Self::set_default_markers`].
    pub fn from_stops(stops: &[MarkerStop]) -> Self {
        let mut collection = Self::default();
        collection.set_default_markers(&stops.iter().map(Marker::from).collect::<Vec<_>>());
        collection
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn selected_marker_id(&self) -> i32 {
        self.selected_marker_id
    }

    pub fn selected_midpoint_id(&self) -> i32 {
        self.selected_midpoint_id
    }

    /// The id the next created marker will receive.
    pub fn next_marker_id(&self) -> i32 {
        self.marker_id_counter
    }

    /// Hands out the next unused marker id.
    pub fn reserve_marker_id(&mut self) -> i32 {
        let id = self.marker_id_counter;
        self.marker_id_counter += 1;
        id
    }

    pub fn index_of(&self, id: i32) -> Option<usize> {
        self.markers.iter().position(|m| m.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<i32> {
        self.markers.get(index).map(|m| m.id)
    }

    pub fn get(&self, id: i32) -> Option<&Marker> {
        self.index_of(id).map(|idx| &self.markers[idx])
    }

    pub fn positions(&self) -> Vec<f32> {
        self.markers.iter().map(|m| m.pos).collect()
    }

    pub fn colors(&self) -> Vec<Rgba> {
        self.markers.iter().map(|m| m.color).collect()
    }

    /// Ratios of every midpoint, excluding the last marker's.
    pub fn midpoint_ratios(&self) -> Vec<f32> {
        self.midpoint_owners().iter().map(|m| m.midpoint.ratio).collect()
    }

    pub fn marker_pos(&self, id: i32) -> f32 {
        self.get(id).map_or(0.0, |m| m.pos)
    }

    pub fn marker_color(&self, id: i32) -> Rgba {
        self.get(id).map_or(WHITE, |m| m.color)
    }

    pub fn midpoint_ratio(&self, id: i32) -> f32 {
        self.get(id)
            .map_or(DEFAULT_MIDPOINT_RATIO, |m| m.midpoint.ratio)
    }

    pub fn selected_marker_pos(&self) -> f32 {
        self.marker_pos(self.selected_marker_id)
    }

    pub fn selected_marker_color(&self) -> Rgba {
        self.marker_color(self.selected_marker_id)
    }

    pub fn selected_midpoint_ratio(&self) -> f32 {
        self.midpoint_ratio(self.selected_midpoint_id)
    }

    /// Ignored when `id` is not in the collection.
    pub fn select_marker(&mut self, id: i32) {
        if self.index_of(id).is_some() {
            self.selected_marker_id = id;
        }
    }

    /// Ignored unless `id` owns a midpoint, i.e. is not the last marker.
    pub fn select_midpoint(&mut self, id: i32) {
        if self.midpoint_owner_index(id).is_some() {
            self.selected_midpoint_id = id;
        }
    }

    pub fn set_marker_color(&mut self, id: i32, color: Rgba) {
        if let Some(idx) = self.index_of(id) {
            self.markers[idx].color = color;
        }
    }

    pub fn set_selected_marker_color(&mut self, color: Rgba) {
        self.set_marker_color(self.selected_marker_id, color);
    }

    pub fn set_selected_marker_pos(&mut self, pos: f32) {
        self.move_marker(self.selected_marker_id, pos);
    }

    pub fn set_selected_midpoint_ratio(&mut self, ratio: f32) {
        self.move_midpoint_ratio(self.selected_midpoint_id, ratio);
    }

    /// Exports the persisted part of every marker, in position order.
    pub fn to_stops(&self) -> Vec<MarkerStop> {
        let last = self.markers.len().saturating_sub(1);
        self.markers
            .iter()
            .enumerate()
            .map(|(i, m)| MarkerStop {
                position: m.pos,
                color: m.color,
                midpoint_ratio: (i < last).then_some(m.midpoint.ratio),
            })
            .collect()
    }

    /// Grows or shrinks the collection to `marker_count` markers.
    ///
    /// Growing appends white markers at `0.0`; shrinking deletes the last marker in
    /// position order until the count matches. Requests below two are ignored.
    pub fn change_marker_count(&mut self, marker_count: usize) {
        if marker_count < 2 {
            return;
        }

        let current = self.markers.len();
        if marker_count == current {
            return;
        }

        if marker_count > current {
            for _ in 0..marker_count - current {
                let id = self.reserve_marker_id();
                self.add_marker(id, 0.0, WHITE, DEFAULT_MIDPOINT_RATIO);
            }
        } else {
            for _ in 0..current - marker_count {
                if let Some(last_id) = self.markers.last().map(|m| m.id) {
                    self.delete_marker(last_id);
                }
            }
        }

        debug!("changed marker count from {current} to {}", self.markers.len());

        self.sort_markers();
        self.update_midpoints_pos();
    }

    /// Replaces every marker.
    ///
    /// Positions and ratios are clamped, ids are assigned in input order and the
    /// selection returns to marker `0`. The marker ceiling is not enforced here.
    /// Inputs with fewer than two entries are rejected.
    pub fn set_default_markers(&mut self, markers: &[Marker]) {
        if markers.len() < 2 {
            warn!(
                "ignoring marker list with {} entries, at least 2 are required",
                markers.len()
            );
            return;
        }

        self.markers = markers
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                Marker::new(i as i32, marker.pos, marker.color, marker.midpoint.ratio)
            })
            .collect();

        self.selected_marker_id = 0;
        self.selected_midpoint_id = 0;
        self.marker_id_counter = self.markers.len() as i32;

        self.sort_markers();
        self.update_midpoints_pos();
    }

    /// Restores the black to white pair, clearing the selection and id counter.
    pub fn reset_to_default(&mut self) {
        self.set_default_markers(&default_markers());
    }

    /// Inserts a marker. The caller guarantees `id` is unused, usually by passing
    /// [`Self::next_marker_id`].
    pub fn add_marker(&mut self, id: i32, pos: f32, color: Rgba, midpoint_ratio: f32) {
        self.markers.push(Marker::new(id, pos, color, midpoint_ratio));
        self.sort_markers();
        self.update_midpoints_pos();
    }

    /// Removes a marker, keeping at least two.
    ///
    /// Survivors are renumbered and the marker now at the deleted index (or the
    /// last one) becomes selected.
    pub fn delete_marker(&mut self, id: i32) {
        if self.markers.len() <= 2 {
            return;
        }
        let Some(idx) = self.index_of(id) else {
            return;
        };

        self.markers.remove(idx);
        self.update_midpoints_pos();
        self.update_marker_ids();

        self.selected_marker_id = match self.markers.get(idx) {
            Some(marker) => marker.id,
            None => self.markers[self.markers.len() - 1].id,
        };

        let midpoint_valid = self
            .index_of(self.selected_midpoint_id)
            .is_some_and(|i| i < self.markers.len() - 1);
        if !midpoint_valid {
            self.selected_midpoint_id = self.markers[0].id;
        }

        debug!("deleted marker {id}, {} remaining", self.markers.len());
    }

    pub fn delete_selected_marker(&mut self) {
        self.delete_marker(self.selected_marker_id);
    }

    /// Moves a marker to `new_pos`; the collection may reorder.
    pub fn move_marker(&mut self, id: i32, new_pos: f32) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.markers[idx].pos = clamp_unit(new_pos);
        self.sort_markers();
        self.update_midpoints_pos();
    }

    /// Moves the midpoint owned by `id` to an absolute gradient position.
    pub fn move_midpoint(&mut self, id: i32, new_pos: f32) {
        let Some(idx) = self.midpoint_owner_index(id) else {
            return;
        };

        let left = self.markers[idx].pos;
        let right = self.markers[idx + 1].pos;
        let span = right - left;
        if span <= MIN_MIDPOINT_SPAN {
            return;
        }

        self.markers[idx].midpoint.ratio = clamp_unit((new_pos - left) / span);
        self.update_midpoints_pos();
    }

    pub fn move_midpoint_ratio(&mut self, id: i32, new_ratio: f32) {
        let Some(idx) = self.midpoint_owner_index(id) else {
            return;
        };
        self.markers[idx].midpoint.ratio = clamp_unit(new_ratio);
        self.update_midpoints_pos();
    }

    /// Mirrors the gradient around its center.
    ///
    /// Midpoint ratios are taken in pre-reversal order, reversed, and assigned as
    /// `1 - ratio` by index after the re-sort. The selected midpoint moves to the
    /// marker that followed it before the reversal.
    pub fn reverse_markers(&mut self) {
        let count = self.markers.len();
        if count == 0 {
            return;
        }

        let right_idx = self.index_of(self.selected_midpoint_id).map_or(0, |i| i + 1);
        let mut right_id = self.selected_midpoint_id;
        let mut old_ratios = Vec::with_capacity(count - 1);

        for (i, marker) in self.markers.iter_mut().enumerate() {
            marker.pos = clamp_unit(1.0 - marker.pos);
            if i < count - 1 {
                old_ratios.push(marker.midpoint.ratio);
            }
            if i == right_idx {
                right_id = marker.id;
            }
        }

        old_ratios.reverse();
        self.sort_markers();

        for (marker, ratio) in self.markers.iter_mut().zip(old_ratios) {
            marker.midpoint.ratio = clamp_unit(1.0 - ratio);
        }
        self.selected_midpoint_id = right_id;

        self.update_midpoints_pos();
    }

    pub fn reset_midpoints(&mut self) {
        let count = self.markers.len();
        for marker in self.markers.iter_mut().take(count.saturating_sub(1)) {
            marker.midpoint.ratio = DEFAULT_MIDPOINT_RATIO;
        }
        self.update_midpoints_pos();
    }

    /// Places marker `i` at `i / (len - 1)` by position rank.
    pub fn distribute_markers_evenly(&mut self) {
        let count = self.markers.len();
        if count < 2 {
            return;
        }
        let last = (count - 1) as f32;
        for (i, marker) in self.markers.iter_mut().enumerate() {
            marker.pos = i as f32 / last;
        }
        self.sort_markers();
        self.update_midpoints_pos();
    }

    /// Distributes the markers, then puts midpoint `i` at absolute position
    /// `(i + 1) / len`.
    pub fn distribute_markers_and_midpoints_evenly(&mut self) {
        self.distribute_markers_evenly();

        let count = self.markers.len();
        for i in 0..count.saturating_sub(1) {
            let id = self.markers[i].id;
            self.move_midpoint(id, (i + 1) as f32 / count as f32);
        }
    }

    pub fn sort_markers(&mut self) {
        self.markers.sort_by(|a, b| a.pos.total_cmp(&b.pos));
    }

    /// Recomputes every absolute midpoint position from its ratio.
    pub fn update_midpoints_pos(&mut self) {
        for i in 0..self.markers.len().saturating_sub(1) {
            let left = self.markers[i].pos;
            let right = self.markers[i + 1].pos;
            let ratio = self.markers[i].midpoint.ratio;
            self.markers[i].midpoint.pos = left + (right - left) * ratio;
        }
    }

    // ids follow position order after renumbering; external parameter slots map to them
    fn update_marker_ids(&mut self) {
        self.sort_markers();
        for (i, marker) in self.markers.iter_mut().enumerate() {
            marker.id = i as i32;
        }
        self.marker_id_counter = self.markers.len() as i32;
    }

    fn midpoint_owners(&self) -> &[Marker] {
        &self.markers[..self.markers.len().saturating_sub(1)]
    }

    fn midpoint_owner_index(&self, id: i32) -> Option<usize> {
        self.index_of(id).filter(|&idx| idx + 1 < self.markers.len())
    }
}
