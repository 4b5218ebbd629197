use crate::ammo::AmmoSource;
use crate::hud::HudSink;

use super::MontagePlayer;

/// Collaborators of the owning character, passed into every slot operation.
///
/// Both the ammo source and the animator are optional: without an ammo source,
/// reloads draw only from the weapon's own reserve; without an animator, every
/// transition takes the synchronous path.
pub struct CharacterContext<'a> {
    pub ammo: Option<&'a mut dyn AmmoSource>,
    pub animator: Option<&'a mut dyn MontagePlayer>,
    pub hud: &'a mut dyn HudSink,
}

impl<'a> CharacterContext<'a> {
    pub fn new(hud: &'a mut dyn HudSink) -> Self {
        Self {
            ammo: None,
            animator: None,
            hud,
        }
    }

    pub fn with_ammo(mut self, ammo: &'a mut dyn AmmoSource) -> Self {
        self.ammo = Some(ammo);
        self
    }

    pub fn with_animator(mut self, animator: &'a mut dyn MontagePlayer) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn ammo(&mut self) -> Option<&mut dyn AmmoSource> {
        match self.ammo {
            Some(ref mut ammo) => Some(&mut **ammo),
            None => None,
        }
    }

    pub fn ammo_ref(&self) -> Option<&dyn AmmoSource> {
        match self.ammo {
            Some(ref ammo) => Some(&**ammo),
            None => None,
        }
    }

    pub fn animator(&mut self) -> Option<&mut dyn MontagePlayer> {
        match self.animator {
            Some(ref mut animator) => Some(&mut **animator),
            None => None,
        }
    }
}
