use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Who or what the damage is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Direct hit by another entity.
    Entity(Entity),
    /// Projectile hit; only attributable when the projectile has an owner.
    Projectile { owner: Option<Entity> },
    /// Environmental damage (fall, lava, void). Never attributable.
    Environment,
}

impl DamageSource {
    /// The entity this damage can be attributed to, if any.
    pub fn attacker(&self) -> Option<Entity> {
        match self {
            DamageSource::Entity(entity) => Some(*entity),
            DamageSource::Projectile { owner } => *owner,
            DamageSource::Environment => None,
        }
    }
}

/// Raw pre-mitigation damage about to land on `target`.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: f32,
    /// Cancelled events stay in the stream for observers but must not
    /// change any health, on either side.
    pub cancelled: bool,
    pub source: DamageSource,
}

/// Intent to attack: resolved into a `DamageEvent` using the attacker's weapon.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackEvent {
    pub attacker: Entity,
    pub target: Entity,
}
