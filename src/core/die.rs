//! Six-sided dice with configurable faces.
//!
//! Dice are built from capabilities rather than a type hierarchy:
//!
//! - [`Roll`]: every die can be rolled and read
//! - [`Freeze`]: some dice can additionally be frozen so rolls skip them
//!
//! [`Die`] implements `Roll`. [`FreezeableDie`] wraps a `Die` and adds
//! `Freeze`.

use serde::{Deserialize, Serialize};

use super::rng::{GameRng, FACES};

/// Value reported by a die that has not been rolled yet.
pub const UNROLLED: i32 = 0;

/// Mapping from face index (1..=6) to scored value, with foul markers.
///
/// ```
/// use decathlon_dice::core::FaceSet;
///
/// let faces = FaceSet::new([1, 2, 3, 4, 5, -6]).with_foul(1);
/// assert_eq!(faces.value(6), -6);
/// assert!(faces.is_foul(1));
/// assert!(!faces.is_foul(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceSet {
    values: [i32; 6],
    fouls: [bool; 6],
}

impl FaceSet {
    /// Plain 1-6 die.
    pub const STANDARD: FaceSet = FaceSet::new([1, 2, 3, 4, 5, 6]);

    /// Create a face set with no foul faces.
    #[must_use]
    pub const fn new(values: [i32; 6]) -> Self {
        Self {
            values,
            fouls: [false; 6],
        }
    }

    /// Mark a face index (1..=6) as a foul face.
    ///
    /// Indices outside the range are ignored.
    #[must_use]
    pub const fn with_foul(mut self, face: u8) -> Self {
        if face >= 1 && face <= FACES {
            self.fouls[(face - 1) as usize] = true;
        }
        self
    }

    /// Scored value of a face index.
    #[must_use]
    pub fn value(&self, face: u8) -> i32 {
        Self::slot(face).map_or(UNROLLED, |i| self.values[i])
    }

    /// Is this face index a foul face?
    #[must_use]
    pub fn is_foul(&self, face: u8) -> bool {
        Self::slot(face).is_some_and(|i| self.fouls[i])
    }

    /// All six values in face order.
    #[must_use]
    pub fn values(&self) -> &[i32; 6] {
        &self.values
    }

    fn slot(face: u8) -> Option<usize> {
        (1..=FACES).contains(&face).then(|| (face - 1) as usize)
    }
}

impl Default for FaceSet {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Anything that can be rolled like a die.
pub trait Roll {
    /// Roll and return the value now showing.
    fn roll(&mut self, rng: &mut GameRng) -> i32;

    /// Value showing, or [`UNROLLED`] before the first roll.
    fn value(&self) -> i32;

    /// Face index showing (1..=6), `None` before the first roll.
    fn face(&self) -> Option<u8>;

    /// Is the face showing a foul face?
    fn is_foul(&self) -> bool;

    /// Return to the unrolled state.
    fn reset(&mut self);
}

/// Dice that can be locked against rolling.
pub trait Freeze {
    /// Is the die frozen?
    fn is_frozen(&self) -> bool;

    /// Flip the frozen flag.
    fn toggle_frozen(&mut self);
}

/// A single six-sided die.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Die {
    faces: FaceSet,
    top: Option<u8>,
}

impl Die {
    /// Create an unrolled die with the given faces.
    #[must_use]
    pub fn new(faces: FaceSet) -> Self {
        Self { faces, top: None }
    }

    /// The face set this die maps through.
    #[must_use]
    pub fn faces(&self) -> &FaceSet {
        &self.faces
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new(FaceSet::STANDARD)
    }
}

impl Roll for Die {
    fn roll(&mut self, rng: &mut GameRng) -> i32 {
        let face = rng.roll_face();
        self.top = Some(face);
        self.faces.value(face)
    }

    fn value(&self) -> i32 {
        self.top.map_or(UNROLLED, |face| self.faces.value(face))
    }

    fn face(&self) -> Option<u8> {
        self.top
    }

    fn is_foul(&self) -> bool {
        self.top.is_some_and(|face| self.faces.is_foul(face))
    }

    fn reset(&mut self) {
        self.top = None;
    }
}

/// A die that ignores rolls while frozen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreezeableDie {
    die: Die,
    frozen: bool,
}

impl FreezeableDie {
    /// Create an unrolled, unfrozen die.
    #[must_use]
    pub fn new(faces: FaceSet) -> Self {
        Self {
            die: Die::new(faces),
            frozen: false,
        }
    }
}

impl Roll for FreezeableDie {
    fn roll(&mut self, rng: &mut GameRng) -> i32 {
        if self.frozen {
            return self.die.value();
        }
        self.die.roll(rng)
    }

    fn value(&self) -> i32 {
        self.die.value()
    }

    fn face(&self) -> Option<u8> {
        self.die.face()
    }

    fn is_foul(&self) -> bool {
        self.die.is_foul()
    }

    /// Unfreezes as well as clearing the face.
    fn reset(&mut self) {
        self.die.reset();
        self.frozen = false;
    }
}

impl Freeze for FreezeableDie {
    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn toggle_frozen(&mut self) {
        self.frozen = !self.frozen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrolled_die_reads_zero() {
        let die = Die::new(FaceSet::new([7, 7, 7, 7, 7, 7]));
        assert_eq!(die.value(), UNROLLED);
        assert_eq!(die.face(), None);
        assert!(!die.is_foul());
    }

    #[test]
    fn test_roll_maps_through_faces() {
        let faces = FaceSet::new([0, 2, 0, 4, 0, 6]);
        let mut die = Die::new(faces);
        let mut rng = GameRng::new(1);

        rng.load(&[4, 5]);
        assert_eq!(die.roll(&mut rng), 4);
        assert_eq!(die.face(), Some(4));
        assert_eq!(die.roll(&mut rng), 0);
        assert_eq!(die.value(), 0);
    }

    #[test]
    fn test_foul_face() {
        let mut die = Die::new(FaceSet::STANDARD.with_foul(1));
        let mut rng = GameRng::new(1);

        rng.load(&[1]);
        die.roll(&mut rng);
        assert!(die.is_foul());
        assert_eq!(die.value(), 1);

        die.reset();
        assert!(!die.is_foul());
        assert_eq!(die.value(), UNROLLED);
    }

    #[test]
    fn test_face_set_ignores_out_of_range() {
        let faces = FaceSet::STANDARD.with_foul(0).with_foul(7);
        assert_eq!(faces, FaceSet::STANDARD);
        assert_eq!(faces.value(0), UNROLLED);
        assert_eq!(faces.value(7), UNROLLED);
        assert!(!faces.is_foul(7));
    }

    #[test]
    fn test_frozen_die_keeps_value() {
        let mut die = FreezeableDie::new(FaceSet::STANDARD);
        let mut rng = GameRng::new(9);

        rng.load(&[5]);
        die.roll(&mut rng);
        die.toggle_frozen();
        assert!(die.is_frozen());

        for _ in 0..50 {
            assert_eq!(die.roll(&mut rng), 5);
        }

        die.toggle_frozen();
        rng.load(&[2]);
        assert_eq!(die.roll(&mut rng), 2);
    }

    #[test]
    fn test_freezeable_reset_unfreezes() {
        let mut die = FreezeableDie::new(FaceSet::STANDARD);
        let mut rng = GameRng::new(9);
        die.roll(&mut rng);
        die.toggle_frozen();

        die.reset();
        assert!(!die.is_frozen());
        assert_eq!(die.face(), None);
    }
}
