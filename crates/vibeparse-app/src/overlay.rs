//! Overlay pointer listeners
//!
//! Every open overlay (TOC, dropdown, notice) holds an [`OverlayGuard`]: a
//! subscription in the app-wide pointer registry. The renderer records where
//! the overlay was drawn, and [`dispatch_press`] turns a pointer press into
//! either a click on one of the overlay's entries or an outside press that
//! dismisses it. Dropping the overlay state drops the guard, so a closed
//! overlay can never react to presses.

use vibeparse_core::{ListenerRegistry, Subscription};

use crate::input_key::{Area, PointerPress};

/// Overlays that listen for pointer presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Toc,
    ProficiencyDropdown,
    DepthDropdown,
    Notice,
}

/// Clickable entry inside an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTarget {
    pub area: Area,
    pub index: usize,
}

/// Listener record stored in the pointer registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerListener {
    pub owner: OverlayKind,
    /// `None` until the overlay has been drawn once
    pub bounds: Option<Area>,
    pub targets: Vec<HitTarget>,
}

/// App-wide registry of overlay pointer listeners
pub type PointerRegistry = ListenerRegistry<PointerListener>;

/// Scoped pointer subscription owned by an open overlay
#[derive(Debug)]
pub struct OverlayGuard {
    kind: OverlayKind,
    subscription: Subscription<PointerListener>,
}

impl OverlayGuard {
    pub fn acquire(registry: &PointerRegistry, kind: OverlayKind) -> Self {
        let subscription = registry.subscribe(PointerListener {
            owner: kind,
            bounds: None,
            targets: Vec::new(),
        });
        tracing::debug!("{:?} overlay opened", kind);
        Self { kind, subscription }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    /// Record where the overlay and its entries were drawn
    pub fn set_layout(&self, bounds: Area, targets: Vec<HitTarget>) {
        self.subscription.modify(|listener| {
            listener.bounds = Some(bounds);
            listener.targets = targets;
        });
    }
}

/// What a pointer press means to one overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerHit {
    /// Pressed outside the overlay: dismiss it
    Outside(OverlayKind),
    /// Pressed on entry `index` of the overlay
    Entry(OverlayKind, usize),
}

/// Route a press to every live overlay listener
///
/// Listeners that have not been drawn yet are skipped; a press inside an
/// overlay but not on an entry means nothing.
pub fn dispatch_press(registry: &PointerRegistry, press: PointerPress) -> Vec<PointerHit> {
    registry
        .snapshot()
        .into_iter()
        .filter_map(|(_, listener)| {
            let bounds = listener.bounds?;
            if !bounds.contains(press) {
                return Some(PointerHit::Outside(listener.owner));
            }
            listener
                .targets
                .iter()
                .find(|target| target.area.contains(press))
                .map(|target| PointerHit::Entry(listener.owner, target.index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_registers_and_releases() {
        let registry = PointerRegistry::new();
        let guard = OverlayGuard::acquire(&registry, OverlayKind::Toc);
        assert_eq!(registry.len(), 1);
        drop(guard);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_undrawn_overlay_ignores_presses() {
        let registry = PointerRegistry::new();
        let _guard = OverlayGuard::acquire(&registry, OverlayKind::Toc);
        assert!(dispatch_press(&registry, PointerPress::new(0, 0)).is_empty());
    }

    #[test]
    fn test_outside_press_dismisses() {
        let registry = PointerRegistry::new();
        let guard = OverlayGuard::acquire(&registry, OverlayKind::Toc);
        guard.set_layout(Area::new(10, 10, 20, 10), vec![]);

        assert_eq!(
            dispatch_press(&registry, PointerPress::new(2, 2)),
            vec![PointerHit::Outside(OverlayKind::Toc)]
        );
        assert!(dispatch_press(&registry, PointerPress::new(15, 15)).is_empty());
    }

    #[test]
    fn test_press_on_entry() {
        let registry = PointerRegistry::new();
        let guard = OverlayGuard::acquire(&registry, OverlayKind::DepthDropdown);
        guard.set_layout(
            Area::new(0, 0, 10, 5),
            vec![
                HitTarget {
                    area: Area::new(1, 1, 8, 1),
                    index: 0,
                },
                HitTarget {
                    area: Area::new(1, 2, 8, 1),
                    index: 1,
                },
            ],
        );

        assert_eq!(
            dispatch_press(&registry, PointerPress::new(3, 2)),
            vec![PointerHit::Entry(OverlayKind::DepthDropdown, 1)]
        );
    }

    #[test]
    fn test_closed_overlay_receives_nothing() {
        let registry = PointerRegistry::new();
        let guard = OverlayGuard::acquire(&registry, OverlayKind::Notice);
        guard.set_layout(Area::new(5, 5, 2, 2), vec![]);
        drop(guard);
        assert!(dispatch_press(&registry, PointerPress::new(0, 0)).is_empty());
    }
}
