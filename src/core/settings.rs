use super::color::Color;
use super::constants::*;
use smallvec::SmallVec;
use std::cmp::Ordering;

pub type ChangeHandler<T> = Box<dyn FnMut(&T)>;

/// A named, observable value exposed to the debug panel.
///
/// `set` clamps the incoming value to the slot's bounds (if any), stores it
/// and then calls every registered handler synchronously, in registration
/// order, with the stored value.
pub struct Setting<T> {
    name: &'static str,
    value: T,
    limit: Option<Box<dyn Fn(T) -> T>>,
    handlers: SmallVec<[ChangeHandler<T>; 2]>,
}

impl<T: Clone> Setting<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self {
            name,
            value,
            limit: None,
            handlers: SmallVec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn on_change(&mut self, handler: impl FnMut(&T) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn set(&mut self, value: T) {
        self.value = match &self.limit {
            Some(limit) => limit(value),
            None => value,
        };
        for handler in self.handlers.iter_mut() {
            handler(&self.value);
        }
    }
}

impl<T: Clone + PartialOrd + 'static> Setting<T> {
    /// Restrict the slot to `[min, max]`. Unordered values (NaN) fall to `min`.
    pub fn with_bounds(mut self, min: T, max: T) -> Self {
        let limit = move |value: T| match value.partial_cmp(&min) {
            Some(Ordering::Less) | None => min.clone(),
            _ if value > max => max.clone(),
            _ => value,
        };
        self.value = limit(self.value);
        self.limit = Some(Box::new(limit));
        self
    }
}

/// The live-tunable values shown in the debug panel.
pub struct DebugSettings {
    pub fireflies_size: Setting<f32>,
    pub portal_center_color: Setting<Color>,
    pub portal_border_color: Setting<Color>,
    pub clear_color: Setting<Color>,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            fireflies_size: Setting::new("Fireflies size", FIREFLIES_SIZE)
                .with_bounds(FIREFLIES_SIZE_MIN, FIREFLIES_SIZE_MAX),
            portal_center_color: Setting::new(
                "uCenterColor",
                Color::from_hex(PORTAL_CENTER_COLOR),
            ),
            portal_border_color: Setting::new(
                "uBorderColor",
                Color::from_hex(PORTAL_BORDER_COLOR),
            ),
            clear_color: Setting::new("clearColor", Color::from_hex(CLEAR_COLOR)),
        }
    }
}
