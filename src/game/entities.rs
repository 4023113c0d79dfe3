//! # Entity Model
//!
//! Player, monsters, and items, plus the shared combat contract.
//!
//! Only two combatant kinds exist (player and monster), tied together by
//! the [`Combatant`] trait so combat can resolve attacks without caring
//! which side is swinging. Items come in two flavors: weapons persist in
//! the player's inventory, potions are consumed on pickup.

use crate::config::{
    PLAYER_BASE_ATTACK, PLAYER_MAX_HEALTH, PLAYER_STARTING_HEALTH, POTION_HEAL_AMOUNT,
};
use crate::Position;
use serde::{Deserialize, Serialize};

/// Contract shared by everything that can fight.
///
/// Health is readable and damageable, attack power is read-only (and may
/// be derived, as with the player's weapon bonus), and attacking simply
/// deals this combatant's attack power to the target.
pub trait Combatant {
    /// Current health of the combatant.
    fn health(&self) -> i32;

    /// Attack power of the combatant.
    fn attack_power(&self) -> i32;

    /// Reduces health by the given amount, never below zero.
    fn take_damage(&mut self, amount: i32);

    /// A combatant is alive while its health is above zero.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Attacks another combatant, dealing damage equal to attack power.
    fn attack(&self, target: &mut dyn Combatant) {
        target.take_damage(self.attack_power());
    }
}

/// The player character.
///
/// Tracks position in the maze, health, and the weapon inventory. Attack
/// power is derived: base damage plus the best weapon modifier owned.
///
/// # Examples
///
/// ```
/// use mazebound::{Combatant, Player, Position, Weapon};
///
/// let mut player = Player::new(Position::new(1, 1));
/// assert_eq!(player.health(), 120);
/// assert_eq!(player.attack_power(), 10);
///
/// player.add_weapon(Weapon::new("Long Sword", 3));
/// assert_eq!(player.attack_power(), 13);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position in the maze
    pub position: Position,
    health: i32,
    weapons: Vec<Weapon>,
}

impl Player {
    /// Creates a new player at the given starting position.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: PLAYER_STARTING_HEALTH,
            weapons: Vec::new(),
        }
    }

    /// Adds a weapon to the inventory. The best modifier owned applies
    /// to attacks automatically.
    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    /// Drinks a potion, restoring health up to the maximum.
    pub fn use_potion(&mut self, potion: &Potion) {
        self.health = (self.health + potion.heal_amount()).min(PLAYER_MAX_HEALTH);
    }

    /// The weapons currently carried.
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    fn best_weapon_modifier(&self) -> i32 {
        self.weapons.iter().map(|w| w.modifier()).max().unwrap_or(0)
    }
}

impl Combatant for Player {
    fn health(&self) -> i32 {
        self.health
    }

    fn attack_power(&self) -> i32 {
        PLAYER_BASE_ATTACK + self.best_weapon_modifier()
    }

    fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }
}

/// A monster encounter.
///
/// Monsters are spawned as fresh copies of roster templates when the
/// player steps onto a monster tile, so damaging one never touches the
/// template it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    name: String,
    health: i32,
    attack_power: i32,
}

impl Monster {
    /// Creates a new monster with the given stats.
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
        }
    }

    /// The monster's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The roster of monster templates encounters are drawn from.
    pub fn roster() -> Vec<Monster> {
        vec![
            Monster::new("Burrow Queen", 45, 12),
            Monster::new("Gloom Weaver", 35, 8),
            Monster::new("Siren of the Deep", 30, 7),
            Monster::new("Night Stalker", 32, 11),
            Monster::new("Barrel Ogre", 48, 12),
            Monster::new("Iron Revenant", 50, 15),
            Monster::new("Blade Dancer", 33, 8),
            Monster::new("Void Watcher", 36, 9),
            Monster::new("Shadow Charger", 42, 13),
            Monster::new("Cave Imp", 30, 5),
            Monster::new("Pit Brawler", 44, 12),
            Monster::new("Temple Guardian", 46, 14),
        ]
    }
}

impl Combatant for Monster {
    fn health(&self) -> i32 {
        self.health
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }
}

/// A weapon item that raises the player's attack power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    modifier: i32,
}

impl Weapon {
    /// Creates a new weapon with the given attack modifier.
    pub fn new(name: impl Into<String>, modifier: i32) -> Self {
        Self {
            name: name.into(),
            modifier,
        }
    }

    /// The weapon's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attack damage modifier this weapon provides.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Message shown when the weapon is picked up.
    pub fn pickup_message(&self) -> String {
        format!("You found a {}! +{} Attack Power", self.name, self.modifier)
    }

    /// The armory of weapon templates pickups are drawn from.
    pub fn armory() -> Vec<Weapon> {
        vec![
            Weapon::new("Oaken Rod", 5),
            Weapon::new("Serrated Harpoon", 7),
            Weapon::new("Long Sword", 3),
            Weapon::new("Ram's Maul", 6),
            Weapon::new("Storm Trident", 33),
            Weapon::new("Scaled Aegis", 4),
            Weapon::new("Moonlit Edge", 8),
            Weapon::new("Sanguine Dagger", 6),
            Weapon::new("Pickaxe", 4),
            Weapon::new("Apprentice Tome", 3),
            Weapon::new("Rusty Shiv", 1),
            Weapon::new("Twin Fang", 5),
            Weapon::new("Steel Sigil", 4),
            Weapon::new("Greatsword", 7),
            Weapon::new("Archmage Crown", 9),
        ]
    }
}

/// A healing potion, consumed immediately on pickup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    heal_amount: i32,
}

impl Potion {
    /// Creates a standard healing potion.
    pub fn new() -> Self {
        Self {
            heal_amount: POTION_HEAL_AMOUNT,
        }
    }

    /// The amount of health this potion restores.
    pub fn heal_amount(&self) -> i32 {
        self.heal_amount
    }

    /// Message shown when the potion is picked up.
    pub fn pickup_message(&self) -> String {
        format!("You found a Health Pot! +{} HP", self.heal_amount)
    }
}

impl Default for Potion {
    fn default() -> Self {
        Self::new()
    }
}
