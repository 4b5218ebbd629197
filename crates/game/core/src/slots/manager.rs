//! Weapon slot manager.
//!
//! Owns the three slot actors and drives the holstered ⇄ equipped state machine.
//! Transitions are two-phase: [`WeaponSlots::begin_transition`] asks the animator
//! to play a montage and returns a token, and the animator later hands the token
//! back through [`WeaponSlots::complete_transition`]. With no montage configured or
//! no animator present the transition resolves synchronously.
//!
//! # Invariants
//!
//! - each slot holds at most one actor, and an occupied slot is never overwritten
//! - at most one actor is `Equipped`, and `current_slot()` names it
//! - at most one transition is in flight ([`AnimationState`])
//! - a pending switch exists only while a holster transition is in flight

use tracing::{debug, info, warn};

use super::{
    AnimationState, CharacterContext, MontageRequest, MontageSet, SlotError, Transition,
    TransitionKind, TransitionOutcome, TransitionRequest, TransitionToken, WeaponSlot,
};
use crate::ammo::AmmoSource;
use crate::hud::HudEvent;
use crate::item::{AmmoType, ItemRecord};
use crate::weapon::{WeaponActor, WeaponState};

#[derive(Clone, Debug, Default)]
pub struct WeaponSlots {
    slots: [Option<WeaponActor>; 3],
    current: Option<WeaponSlot>,
    pending: Option<WeaponSlot>,
    animation: AnimationState,
    montages: MontageSet,
    next_token: u64,
}

impl WeaponSlots {
    pub fn new(montages: MontageSet) -> Self {
        Self {
            montages,
            ..Self::default()
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn weapon(&self, slot: WeaponSlot) -> Option<&WeaponActor> {
        self.slots[slot.index()].as_ref()
    }

    pub fn weapon_mut(&mut self, slot: WeaponSlot) -> Option<&mut WeaponActor> {
        self.slots[slot.index()].as_mut()
    }

    /// True when the slot can take a new weapon.
    pub fn is_slot_available(&self, slot: WeaponSlot) -> bool {
        self.slots[slot.index()].is_none()
    }

    /// Slot of the equipped weapon.
    pub fn current_slot(&self) -> Option<WeaponSlot> {
        self.current
    }

    pub fn current_weapon(&self) -> Option<&WeaponActor> {
        self.current.and_then(|slot| self.weapon(slot))
    }

    /// Slot whose draw waits for the in-flight holster.
    pub fn pending_slot(&self) -> Option<WeaponSlot> {
        self.pending
    }

    pub fn has_pending_switch(&self) -> bool {
        self.pending.is_some()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation
    }

    pub fn is_animating(&self) -> bool {
        !self.animation.is_idle()
    }

    pub fn montages(&self) -> &MontageSet {
        &self.montages
    }

    pub fn set_montages(&mut self, montages: MontageSet) {
        self.montages = montages;
    }

    /// Occupied slots with their actors.
    pub fn iter(&self) -> impl Iterator<Item = (WeaponSlot, &WeaponActor)> {
        WeaponSlot::ALL
            .into_iter()
            .filter_map(|slot| self.weapon(slot).map(|actor| (slot, actor)))
    }

    pub fn equipped_count(&self) -> usize {
        self.iter().filter(|(_, actor)| actor.is_equipped()).count()
    }

    // ========================================================================
    // Assignment
    // ========================================================================

    /// Places a spawned actor into an empty slot, holstered.
    pub fn assign_to_slot(
        &mut self,
        slot: WeaponSlot,
        mut actor: WeaponActor,
    ) -> Result<(), SlotError> {
        if !self.is_slot_available(slot) {
            warn!(%slot, weapon = %actor.id(), "slot already occupied");
            return Err(SlotError::SlotOccupied(slot));
        }

        actor.set_state(WeaponState::Holstered);
        info!(%slot, weapon = %actor.id(), socket = actor.holster_socket(), "assigned weapon to slot");
        self.slots[slot.index()] = Some(actor);
        Ok(())
    }

    /// Spawns an actor for `item` and places it into `slot`, replacing the occupant.
    ///
    /// The melee slot takes `Melee` items and the other slots take `Weapon` items.
    /// Nothing changes if the item is rejected or the occupant is mid-transition.
    pub fn assign_item_to_slot(
        &mut self,
        slot: WeaponSlot,
        item: &ItemRecord,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<(), SlotError> {
        if !slot.accepts(item.item_type()) {
            return Err(SlotError::WrongItemType {
                slot,
                item_type: item.item_type(),
            });
        }
        if item.weapon().is_none() {
            return Err(SlotError::NotAWeapon(item.id().clone()));
        }
        if self.animation.is_animating(slot) {
            return Err(SlotError::AnimationBusy);
        }

        let actor = WeaponActor::spawn(item)?;
        if !self.is_slot_available(slot) {
            self.unequip_weapon(slot, ctx)?;
        }
        self.assign_to_slot(slot, actor)
    }

    /// Removes and destroys the actor in `slot`.
    ///
    /// Clears the equipped and pending references to it. Refused while that slot's
    /// transition is playing.
    pub fn unequip_weapon(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<WeaponActor, SlotError> {
        if self.animation.is_animating(slot) {
            return Err(SlotError::AnimationBusy);
        }
        let mut actor = self.slots[slot.index()]
            .take()
            .ok_or(SlotError::SlotEmpty(slot))?;

        actor.set_state(WeaponState::Unequipped);
        if self.current == Some(slot) {
            self.current = None;
            ctx.hud.notify(HudEvent::WeaponDisplay(None));
        }
        if self.pending == Some(slot) {
            debug!(%slot, "pending switch target removed");
            self.pending = None;
        }
        info!(%slot, weapon = %actor.id(), "destroyed weapon");
        Ok(actor)
    }

    /// Cold-start equip: spawns `item` into the slot its category maps to and puts
    /// it straight into the hand, holstering whatever was drawn. No animation.
    pub fn equip_weapon(
        &mut self,
        item: &ItemRecord,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<WeaponSlot, SlotError> {
        self.ensure_idle()?;
        let weapon = item
            .weapon()
            .ok_or_else(|| SlotError::NotAWeapon(item.id().clone()))?;
        let slot = WeaponSlot::for_category(weapon.category);
        if !self.is_slot_available(slot) {
            return Err(SlotError::SlotOccupied(slot));
        }

        let actor = WeaponActor::spawn(item)?;
        self.assign_to_slot(slot, actor)?;
        self.apply_draw(slot, ctx)?;
        Ok(slot)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Draws the weapon in `slot`, holstering the current weapon first if another
    /// one is drawn. The draw then waits as the pending switch target.
    pub fn draw_with_animation(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<TransitionOutcome, SlotError> {
        self.begin_transition(TransitionRequest::Draw(slot), ctx)
    }

    pub fn holster_with_animation(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<TransitionOutcome, SlotError> {
        self.begin_transition(TransitionRequest::Holster(slot), ctx)
    }

    /// Starts a transition. Requests made while another transition is in flight
    /// are dropped with [`SlotError::AnimationBusy`].
    pub fn begin_transition(
        &mut self,
        request: TransitionRequest,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<TransitionOutcome, SlotError> {
        if let Err(err) = self.ensure_idle() {
            debug!(?request, "transition dropped, animation in flight");
            return Err(err);
        }
        match request {
            TransitionRequest::Draw(slot) => self.begin_draw(slot, ctx),
            TransitionRequest::Holster(slot) => self.begin_holster(slot, ctx),
        }
    }

    /// Finishes the in-flight transition. A finished holster chains the pending
    /// draw, whose outcome is returned.
    pub fn complete_transition(
        &mut self,
        token: TransitionToken,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<Option<TransitionOutcome>, SlotError> {
        let transition = match self.animation {
            AnimationState::InFlight(transition) if transition.token == token => transition,
            _ => {
                warn!(%token, "completion for a transition that is not in flight");
                return Err(SlotError::UnknownTransition(token));
            }
        };

        self.animation = AnimationState::Idle;
        debug!(%token, kind = %transition.kind, slot = %transition.slot, "transition complete");
        match transition.kind {
            TransitionKind::Draw => {
                self.apply_draw(transition.slot, ctx)?;
                Ok(None)
            }
            TransitionKind::Holster => self.finish_holster(transition.slot, ctx),
        }
    }

    /// Equip-montage completion callback.
    pub fn on_equip_animation_complete(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<Option<TransitionOutcome>, SlotError> {
        let token = self.in_flight_token(TransitionKind::Draw, slot)?;
        self.complete_transition(token, ctx)
    }

    /// Holster-montage completion callback.
    pub fn on_holster_animation_complete(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<Option<TransitionOutcome>, SlotError> {
        let token = self.in_flight_token(TransitionKind::Holster, slot)?;
        self.complete_transition(token, ctx)
    }

    /// Puts the weapon in `slot` into the hand immediately. Any other drawn weapon
    /// is holstered so that only one stays equipped.
    pub fn draw_weapon(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<(), SlotError> {
        self.ensure_idle()?;
        self.apply_draw(slot, ctx)
    }

    /// Holsters the weapon in `slot` immediately.
    pub fn holster_weapon(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<(), SlotError> {
        self.ensure_idle()?;
        self.expect_state(slot, WeaponState::Equipped)?;
        self.apply_holster(slot, ctx)
    }

    fn begin_draw(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<TransitionOutcome, SlotError> {
        self.expect_state(slot, WeaponState::Holstered)?;

        if let Some(current) = self.current.filter(|current| *current != slot) {
            debug!(from = %current, to = %slot, "switch deferred until holster completes");
            self.pending = Some(slot);
            return match self.begin_holster(current, ctx) {
                Ok(TransitionOutcome::Animating(token)) => Ok(TransitionOutcome::Deferred {
                    holstering: current,
                    token,
                }),
                // Synchronous holster already chained the draw.
                Ok(outcome) => Ok(outcome),
                Err(err) => {
                    self.pending = None;
                    Err(err)
                }
            };
        }

        self.start(slot, TransitionKind::Draw, ctx)
    }

    fn begin_holster(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<TransitionOutcome, SlotError> {
        self.expect_state(slot, WeaponState::Equipped)?;
        self.start(slot, TransitionKind::Holster, ctx)
    }

    /// Plays the slot's montage, or applies the transition at once when there is
    /// no montage or no animator.
    fn start(
        &mut self,
        slot: WeaponSlot,
        kind: TransitionKind,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<TransitionOutcome, SlotError> {
        if let Some(montage) = self.montages.get(slot, kind).cloned() {
            if let Some(animator) = ctx.animator() {
                let token = TransitionToken(self.next_token);
                self.next_token += 1;
                self.animation = AnimationState::InFlight(Transition { token, kind, slot });

                info!(%slot, %kind, %montage, %token, "playing weapon montage");
                animator.play(MontageRequest {
                    token,
                    slot,
                    kind,
                    montage,
                });
                return Ok(TransitionOutcome::Animating(token));
            }
            debug!(%slot, %kind, "no animator, transition applied synchronously");
        }

        match kind {
            TransitionKind::Draw => {
                self.apply_draw(slot, ctx)?;
                Ok(TransitionOutcome::Immediate)
            }
            TransitionKind::Holster => Ok(self
                .finish_holster(slot, ctx)?
                .unwrap_or(TransitionOutcome::Immediate)),
        }
    }

    fn finish_holster(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<Option<TransitionOutcome>, SlotError> {
        self.apply_holster(slot, ctx)?;

        let Some(next) = self.pending.take() else {
            return Ok(None);
        };
        debug!(%next, "chaining pending draw");
        match self.begin_draw(next, ctx) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(err) => {
                warn!(%next, %err, "pending draw could not start");
                Ok(None)
            }
        }
    }

    fn apply_draw(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<(), SlotError> {
        if self.is_slot_available(slot) {
            return Err(SlotError::SlotEmpty(slot));
        }

        if let Some(previous) = self.current.filter(|previous| *previous != slot) {
            if let Some(actor) = self.slots[previous.index()].as_mut() {
                actor.set_state(WeaponState::Holstered);
            }
        }
        self.current = Some(slot);

        let summary = match self.slots[slot.index()].as_mut() {
            Some(actor) => {
                actor.set_state(WeaponState::Equipped);
                info!(%slot, weapon = %actor.id(), socket = actor.attach_socket(), "drew weapon");
                actor.summary()
            }
            None => return Err(SlotError::SlotEmpty(slot)),
        };
        ctx.hud.notify(HudEvent::WeaponDisplay(Some(summary)));
        self.notify_ammo(ctx);
        Ok(())
    }

    fn apply_holster(
        &mut self,
        slot: WeaponSlot,
        ctx: &mut CharacterContext<'_>,
    ) -> Result<(), SlotError> {
        let actor = self.slots[slot.index()]
            .as_mut()
            .ok_or(SlotError::SlotEmpty(slot))?;
        actor.set_state(WeaponState::Holstered);
        info!(%slot, weapon = %actor.id(), socket = actor.attach_socket(), "holstered weapon");

        if self.current == Some(slot) {
            self.current = None;
            ctx.hud.notify(HudEvent::WeaponDisplay(None));
        }
        Ok(())
    }

    // ========================================================================
    // Weapon actions
    // ========================================================================

    /// Fires the drawn weapon once. Returns the rounds left in its magazine.
    pub fn fire(&mut self, ctx: &mut CharacterContext<'_>) -> Result<u32, SlotError> {
        let left = self.drawn_mut()?.fire()?;
        self.notify_ammo(ctx);
        Ok(left)
    }

    /// Pulls the trigger: fires once now, and automatic weapons keep firing on each
    /// tick until [`stop_fire`](Self::stop_fire).
    pub fn start_fire(&mut self, ctx: &mut CharacterContext<'_>) -> Result<u32, SlotError> {
        let actor = self.drawn_mut()?;
        actor.start_fire()?;
        match actor.fire() {
            Ok(left) => {
                self.notify_ammo(ctx);
                Ok(left)
            }
            Err(err) => {
                actor.stop_fire();
                Err(err.into())
            }
        }
    }

    pub fn stop_fire(&mut self) {
        if let Ok(actor) = self.drawn_mut() {
            actor.stop_fire();
        }
    }

    /// Starts reloading the drawn weapon. The magazine fills when the reload timer
    /// runs out during [`tick`](Self::tick).
    pub fn reload(&mut self, ctx: &mut CharacterContext<'_>) -> Result<(), SlotError> {
        let ammo = ctx.ammo_ref();
        let actor = self.drawn_mut()?;
        let available = available_for(actor, ammo);
        actor.begin_reload(available)?;
        Ok(())
    }

    /// Melee attack with the drawn weapon. Returns the damage dealt.
    pub fn attack(&mut self) -> Result<f32, SlotError> {
        Ok(self.drawn_mut()?.attack()?)
    }

    /// True when the drawn weapon can reload and the ammo source holds rounds for it.
    pub fn can_reload_from_inventory(&self, ammo: Option<&dyn AmmoSource>) -> bool {
        match self.current_weapon() {
            Some(actor) if actor.can_reload() => available_for(actor, ammo) > 0,
            _ => false,
        }
    }

    pub fn available_ammo_in_inventory(
        &self,
        ammo_type: AmmoType,
        ammo: Option<&dyn AmmoSource>,
    ) -> u32 {
        ammo.map_or(0, |source| source.available_ammo(ammo_type))
    }

    /// Advances every actor's timers by `dt` seconds.
    pub fn tick(&mut self, dt: f32, ctx: &mut CharacterContext<'_>) {
        let mut ammo_changed = false;
        for slot in WeaponSlot::ALL {
            let Some(actor) = self.slots[slot.index()].as_mut() else {
                continue;
            };
            let report = actor.tick(dt, ctx.ammo());
            if report.changed_ammo() && self.current == Some(slot) {
                ammo_changed = true;
            }
        }
        if ammo_changed {
            self.notify_ammo(ctx);
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn ensure_idle(&self) -> Result<(), SlotError> {
        if self.animation.is_idle() {
            Ok(())
        } else {
            Err(SlotError::AnimationBusy)
        }
    }

    fn expect_state(&self, slot: WeaponSlot, expected: WeaponState) -> Result<(), SlotError> {
        let actor = self.weapon(slot).ok_or(SlotError::SlotEmpty(slot))?;
        if actor.state() != expected {
            return Err(SlotError::InvalidState {
                slot,
                actual: actor.state(),
                expected,
            });
        }
        Ok(())
    }

    fn in_flight_token(
        &self,
        kind: TransitionKind,
        slot: WeaponSlot,
    ) -> Result<TransitionToken, SlotError> {
        match self.animation.in_flight() {
            Some(transition) if transition.kind == kind && transition.slot == slot => {
                Ok(transition.token)
            }
            _ => {
                warn!(%slot, %kind, "completion callback with no matching transition");
                Err(SlotError::NoTransitionFor(slot))
            }
        }
    }

    fn drawn_mut(&mut self) -> Result<&mut WeaponActor, SlotError> {
        let slot = self.current.ok_or(SlotError::NoWeaponDrawn)?;
        self.slots[slot.index()]
            .as_mut()
            .ok_or(SlotError::SlotEmpty(slot))
    }

    fn notify_ammo(&self, ctx: &mut CharacterContext<'_>) {
        let Some(actor) = self.current_weapon() else {
            return;
        };
        if !actor.is_firearm() {
            return;
        }
        let reserve = actor.reserve_ammo() + available_for(actor, ctx.ammo_ref());
        ctx.hud.notify(HudEvent::AmmoChanged {
            magazine: actor.ammo_in_magazine(),
            reserve,
        });
    }
}

fn available_for(actor: &WeaponActor, ammo: Option<&dyn AmmoSource>) -> u32 {
    match (actor.required_ammo_type(), ammo) {
        (Some(ammo_type), Some(source)) => source.available_ammo(ammo_type),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::HudLog;
    use crate::inventory::InventoryLedger;
    use crate::item::{
        AmmoData, ItemData, ItemNumericData, ItemType, WeaponCategory, WeaponData,
    };
    use crate::slots::{MontageHandle, RecordingMontagePlayer};

    fn firearm(id: &str, category: WeaponCategory, ammo_type: AmmoType) -> ItemRecord {
        let data = ItemData::new(id, ItemType::Weapon, ItemNumericData::single(2.0))
            .with_name(id)
            .with_weapon(WeaponData::firearm(category, ammo_type, 6));
        ItemRecord::from_data(data, 1)
    }

    fn rifle() -> ItemRecord {
        firearm("rifle", WeaponCategory::Rifle, AmmoType::RifleAmmo)
    }

    fn pistol() -> ItemRecord {
        firearm("pistol", WeaponCategory::Handgun, AmmoType::PistolAmmo)
    }

    fn knife() -> ItemRecord {
        let data = ItemData::new("knife", ItemType::Melee, ItemNumericData::single(0.5))
            .with_weapon(WeaponData::melee(30.0));
        ItemRecord::from_data(data, 1)
    }

    fn animated() -> WeaponSlots {
        WeaponSlots::new(MontageSet::uniform("AM_Equip", "AM_Holster"))
    }

    fn assert_single_equipped(slots: &WeaponSlots) {
        assert!(slots.equipped_count() <= 1);
        if let Some(current) = slots.current_slot() {
            assert!(slots.weapon(current).unwrap().is_equipped());
        } else {
            assert_eq!(slots.equipped_count(), 0);
        }
    }

    #[test]
    fn swap_holsters_then_draws() {
        let mut slots = animated();
        let mut hud = HudLog::new();
        let mut animator = RecordingMontagePlayer::default();
        let mut ctx = CharacterContext::new(&mut hud).with_animator(&mut animator);

        assert_eq!(slots.equip_weapon(&rifle(), &mut ctx), Ok(WeaponSlot::Primary));
        slots
            .assign_item_to_slot(WeaponSlot::Secondary, &pistol(), &mut ctx)
            .unwrap();

        let outcome = slots
            .draw_with_animation(WeaponSlot::Secondary, &mut ctx)
            .unwrap();
        assert!(matches!(
            outcome,
            TransitionOutcome::Deferred {
                holstering: WeaponSlot::Primary,
                ..
            }
        ));
        // Nothing has moved yet.
        assert_eq!(slots.current_slot(), Some(WeaponSlot::Primary));
        assert_eq!(
            slots.weapon(WeaponSlot::Secondary).unwrap().state(),
            WeaponState::Holstered
        );
        assert_eq!(slots.pending_slot(), Some(WeaponSlot::Secondary));

        let chained = slots
            .on_holster_animation_complete(WeaponSlot::Primary, &mut ctx)
            .unwrap();
        assert!(matches!(chained, Some(TransitionOutcome::Animating(_))));
        assert_eq!(
            slots.weapon(WeaponSlot::Primary).unwrap().state(),
            WeaponState::Holstered
        );
        assert_eq!(slots.current_slot(), None);
        assert!(!slots.has_pending_switch());
        assert!(slots.animation_state().is_animating(WeaponSlot::Secondary));

        slots
            .on_equip_animation_complete(WeaponSlot::Secondary, &mut ctx)
            .unwrap();
        assert_eq!(slots.current_slot(), Some(WeaponSlot::Secondary));
        assert!(slots.weapon(WeaponSlot::Secondary).unwrap().is_equipped());
        assert!(slots.animation_state().is_idle());
        assert_single_equipped(&slots);

        drop(ctx);
        let kinds: Vec<_> = animator.requests.iter().map(|r| (r.slot, r.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (WeaponSlot::Primary, TransitionKind::Holster),
                (WeaponSlot::Secondary, TransitionKind::Draw),
            ]
        );
        assert!(matches!(
            hud.current_display(),
            Some(Some(summary)) if summary.name == "pistol"
        ));
    }

    #[test]
    fn requests_during_flight_are_dropped() {
        let mut slots = animated();
        let mut hud = HudLog::new();
        let mut animator = RecordingMontagePlayer::default();
        let mut ctx = CharacterContext::new(&mut hud).with_animator(&mut animator);

        slots
            .assign_item_to_slot(WeaponSlot::Primary, &rifle(), &mut ctx)
            .unwrap();
        slots
            .assign_item_to_slot(WeaponSlot::Melee, &knife(), &mut ctx)
            .unwrap();
        let token = slots
            .draw_with_animation(WeaponSlot::Primary, &mut ctx)
            .unwrap()
            .token()
            .unwrap();

        assert_eq!(
            slots.draw_with_animation(WeaponSlot::Melee, &mut ctx),
            Err(SlotError::AnimationBusy)
        );
        assert_eq!(
            slots.equip_weapon(&pistol(), &mut ctx),
            Err(SlotError::AnimationBusy)
        );
        assert_eq!(
            slots.unequip_weapon(WeaponSlot::Primary, &mut ctx).map(|_| ()),
            Err(SlotError::AnimationBusy)
        );
        assert!(!slots.has_pending_switch());

        assert_eq!(
            slots.complete_transition(TransitionToken(token.0 + 1), &mut ctx),
            Err(SlotError::UnknownTransition(TransitionToken(token.0 + 1)))
        );
        assert_eq!(slots.complete_transition(token, &mut ctx), Ok(None));
        assert_eq!(slots.current_slot(), Some(WeaponSlot::Primary));
        assert_eq!(
            slots.complete_transition(token, &mut ctx),
            Err(SlotError::UnknownTransition(token))
        );
    }

    #[test]
    fn missing_montage_falls_back_to_synchronous_path() {
        let mut montages = MontageSet::default();
        montages.set(
            WeaponSlot::Primary,
            TransitionKind::Holster,
            Some(MontageHandle::new("AM_Rifle_Holster")),
        );
        let mut slots = WeaponSlots::new(montages);
        let mut hud = HudLog::new();
        let mut animator = RecordingMontagePlayer::default();
        let mut ctx = CharacterContext::new(&mut hud).with_animator(&mut animator);

        slots
            .assign_item_to_slot(WeaponSlot::Primary, &rifle(), &mut ctx)
            .unwrap();
        assert_eq!(
            slots.draw_with_animation(WeaponSlot::Primary, &mut ctx),
            Ok(TransitionOutcome::Immediate)
        );
        assert_eq!(slots.current_slot(), Some(WeaponSlot::Primary));

        let outcome = slots
            .holster_with_animation(WeaponSlot::Primary, &mut ctx)
            .unwrap();
        assert!(matches!(outcome, TransitionOutcome::Animating(_)));
    }

    #[test]
    fn synchronous_swap_chains_pending_draw_at_once() {
        let mut slots = WeaponSlots::default();
        let mut hud = HudLog::new();
        let mut ctx = CharacterContext::new(&mut hud);

        slots.equip_weapon(&rifle(), &mut ctx).unwrap();
        slots
            .assign_item_to_slot(WeaponSlot::Melee, &knife(), &mut ctx)
            .unwrap();

        assert_eq!(
            slots.draw_with_animation(WeaponSlot::Melee, &mut ctx),
            Ok(TransitionOutcome::Immediate)
        );
        assert_eq!(slots.current_slot(), Some(WeaponSlot::Melee));
        assert_eq!(
            slots.weapon(WeaponSlot::Primary).unwrap().state(),
            WeaponState::Holstered
        );
        assert!(!slots.has_pending_switch());
        assert_single_equipped(&slots);
    }

    #[test]
    fn draw_and_holster_require_expected_state() {
        let mut slots = WeaponSlots::default();
        let mut hud = HudLog::new();
        let mut ctx = CharacterContext::new(&mut hud);

        assert_eq!(
            slots.draw_with_animation(WeaponSlot::Primary, &mut ctx),
            Err(SlotError::SlotEmpty(WeaponSlot::Primary))
        );
        slots
            .assign_item_to_slot(WeaponSlot::Primary, &rifle(), &mut ctx)
            .unwrap();
        assert!(matches!(
            slots.holster_with_animation(WeaponSlot::Primary, &mut ctx),
            Err(SlotError::InvalidState { .. })
        ));
        slots.draw_weapon(WeaponSlot::Primary, &mut ctx).unwrap();
        assert!(matches!(
            slots.draw_with_animation(WeaponSlot::Primary, &mut ctx),
            Err(SlotError::InvalidState {
                actual: WeaponState::Equipped,
                ..
            })
        ));
    }

    #[test]
    fn direct_draw_keeps_single_equipped() {
        let mut slots = WeaponSlots::default();
        let mut hud = HudLog::new();
        let mut ctx = CharacterContext::new(&mut hud);

        slots
            .assign_item_to_slot(WeaponSlot::Primary, &rifle(), &mut ctx)
            .unwrap();
        slots
            .assign_item_to_slot(WeaponSlot::Secondary, &pistol(), &mut ctx)
            .unwrap();
        slots.draw_weapon(WeaponSlot::Primary, &mut ctx).unwrap();
        slots.draw_weapon(WeaponSlot::Secondary, &mut ctx).unwrap();

        assert_eq!(slots.current_slot(), Some(WeaponSlot::Secondary));
        assert_eq!(slots.equipped_count(), 1);
        slots.holster_weapon(WeaponSlot::Secondary, &mut ctx).unwrap();
        assert_eq!(slots.current_slot(), None);
        assert_eq!(slots.equipped_count(), 0);
    }

    #[test]
    fn slots_are_exclusive() {
        let mut slots = WeaponSlots::default();
        let mut hud = HudLog::new();
        let mut ctx = CharacterContext::new(&mut hud);

        slots.equip_weapon(&rifle(), &mut ctx).unwrap();
        let shotgun = firearm("shotgun", WeaponCategory::Shotgun, AmmoType::ShotgunShells);
        assert_eq!(
            slots.equip_weapon(&shotgun, &mut ctx),
            Err(SlotError::SlotOccupied(WeaponSlot::Primary))
        );
        let actor = WeaponActor::spawn(&shotgun).unwrap();
        assert_eq!(
            slots.assign_to_slot(WeaponSlot::Primary, actor),
            Err(SlotError::SlotOccupied(WeaponSlot::Primary))
        );
        assert_eq!(slots.weapon(WeaponSlot::Primary).unwrap().id().as_str(), "rifle");
    }

    #[test]
    fn assign_item_validates_type_and_replaces_occupant() {
        let mut slots = WeaponSlots::default();
        let mut hud = HudLog::new();
        let mut ctx = CharacterContext::new(&mut hud);

        assert!(matches!(
            slots.assign_item_to_slot(WeaponSlot::Melee, &rifle(), &mut ctx),
            Err(SlotError::WrongItemType { .. })
        ));
        assert!(matches!(
            slots.assign_item_to_slot(WeaponSlot::Primary, &knife(), &mut ctx),
            Err(SlotError::WrongItemType { .. })
        ));

        slots.equip_weapon(&rifle(), &mut ctx).unwrap();
        let shotgun = firearm("shotgun", WeaponCategory::Shotgun, AmmoType::ShotgunShells);
        slots
            .assign_item_to_slot(WeaponSlot::Primary, &shotgun, &mut ctx)
            .unwrap();

        let actor = slots.weapon(WeaponSlot::Primary).unwrap();
        assert_eq!(actor.id().as_str(), "shotgun");
        assert_eq!(actor.state(), WeaponState::Holstered);
        assert_eq!(slots.current_slot(), None);
    }

    #[test]
    fn unequip_clears_current_and_pending() {
        let mut slots = animated();
        let mut hud = HudLog::new();
        let mut animator = RecordingMontagePlayer::default();
        let mut ctx = CharacterContext::new(&mut hud).with_animator(&mut animator);

        slots.equip_weapon(&rifle(), &mut ctx).unwrap();
        slots
            .assign_item_to_slot(WeaponSlot::Secondary, &pistol(), &mut ctx)
            .unwrap();
        slots
            .draw_with_animation(WeaponSlot::Secondary, &mut ctx)
            .unwrap();

        let removed = slots
            .unequip_weapon(WeaponSlot::Secondary, &mut ctx)
            .unwrap();
        assert_eq!(removed.state(), WeaponState::Unequipped);
        assert!(!slots.has_pending_switch());

        let chained = slots
            .on_holster_animation_complete(WeaponSlot::Primary, &mut ctx)
            .unwrap();
        assert_eq!(chained, None);
        assert_eq!(slots.current_slot(), None);
        assert!(slots.animation_state().is_idle());
    }

    #[test]
    fn reload_draws_from_inventory_after_timer() {
        let mut ledger = InventoryLedger::with_capacity(10, 50.0);
        let rounds = ItemData::new("rifle_ammo", ItemType::Ammo, ItemNumericData::stackable(0.02, 60))
            .with_ammo(AmmoData::new(AmmoType::RifleAmmo));
        ledger.add_item(&ItemRecord::from_data(rounds, 10));

        let mut slots = WeaponSlots::default();
        let mut hud = HudLog::new();
        let mut ctx = CharacterContext::new(&mut hud).with_ammo(&mut ledger);

        assert!(!slots.can_reload_from_inventory(ctx.ammo_ref()));
        slots.equip_weapon(&rifle(), &mut ctx).unwrap();
        assert!(!slots.can_reload_from_inventory(ctx.ammo_ref()));

        assert_eq!(slots.fire(&mut ctx), Ok(5));
        assert!(slots.can_reload_from_inventory(ctx.ammo_ref()));
        slots.reload(&mut ctx).unwrap();
        assert!(matches!(
            slots.fire(&mut ctx),
            Err(SlotError::Weapon(crate::weapon::WeaponError::Reloading))
        ));

        slots.tick(2.0, &mut ctx);
        let actor = slots.current_weapon().unwrap();
        assert_eq!(actor.ammo_in_magazine(), 6);
        assert_eq!(
            slots.available_ammo_in_inventory(AmmoType::RifleAmmo, ctx.ammo_ref()),
            9
        );

        drop(ctx);
        assert!(matches!(
            hud.events().last(),
            Some(HudEvent::AmmoChanged {
                magazine: 6,
                reserve: 9
            })
        ));
    }

    #[test]
    fn actions_need_a_drawn_weapon() {
        let mut slots = WeaponSlots::default();
        let mut hud = HudLog::new();
        let mut ctx = CharacterContext::new(&mut hud);

        assert_eq!(slots.fire(&mut ctx), Err(SlotError::NoWeaponDrawn));
        assert_eq!(slots.attack(), Err(SlotError::NoWeaponDrawn));
        slots.stop_fire();

        slots.equip_weapon(&knife(), &mut ctx).unwrap();
        assert_eq!(slots.attack(), Ok(30.0));
        assert!(matches!(
            slots.start_fire(&mut ctx),
            Err(SlotError::Weapon(_))
        ));
    }
}
