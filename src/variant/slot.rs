use super::Variant;

/// Target of a mutating accessor: either a live entry inside a variant, or an
/// inert sink for requests that made no sense (keyed access on a string,
/// index past the end, ...). The inert side holds no reference at all, so
/// nothing written to it can land anywhere.
///
/// ```
/// use variant::Variant;
///
/// let mut v = Variant::new();
/// v.entry("settings").entry("volume").set(11);
/// assert_eq!(v["settings"]["volume"].as_integer(0), 11);
///
/// let mut s = Variant::from("text");
/// s.entry("k").set(1); // absorbed
/// assert_eq!(s, Variant::from("text"));
/// ```
#[derive(Debug)]
#[must_use]
pub enum Slot<'a> {
    Live(&'a mut Variant),
    Inert,
}

impl<'a> Slot<'a> {
    pub fn is_inert(&self) -> bool { matches!(self, Slot::Inert) }

    pub fn is_live(&self) -> bool { !self.is_inert() }

    /// Current value; the `ConstNull` sentinel for an inert slot.
    pub fn get(&self) -> &Variant {
        match self {
            Slot::Live(v) => &**v,
            Slot::Inert => Variant::const_null(),
        }
    }

    pub fn into_mut(self) -> Option<&'a mut Variant> {
        match self {
            Slot::Live(v) => Some(v),
            Slot::Inert => None,
        }
    }

    pub fn set(self, value: impl Into<Variant>) {
        match self {
            Slot::Live(v) => {
                v.set(value);
            }
            Slot::Inert => log::trace!("write through inert slot discarded"),
        }
    }

    pub fn assign(self, value: &Variant) {
        match self {
            Slot::Live(v) => {
                v.assign(value);
            }
            Slot::Inert => log::trace!("copy through inert slot discarded"),
        }
    }

    pub fn push_back(self, value: impl Into<Variant>) {
        if let Slot::Live(v) = self {
            v.push_back(value);
        }
    }

    /// Chained keyed access, with the same auto-vivification as
    /// [`Variant::entry`].
    pub fn entry(self, key: &str) -> Slot<'a> {
        match self {
            Slot::Live(v) => v.entry(key),
            Slot::Inert => Slot::Inert,
        }
    }

    /// Chained indexed access, see [`Variant::at_mut`].
    pub fn at(self, position: usize) -> Slot<'a> {
        match self {
            Slot::Live(v) => v.at_mut(position),
            Slot::Inert => Slot::Inert,
        }
    }
}
