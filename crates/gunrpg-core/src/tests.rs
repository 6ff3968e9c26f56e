use crate::enums::BodyPart;
use crate::ids::OperatorId;
use crate::weapon::{DamageBand, Weapon};

fn sample_weapon() -> Weapon {
    Weapon {
        name: "M4A1".to_string(),
        rounds_per_minute: 750.0,
        magazine_size: 30,
        reload_ms: 2200,
        damage_bands: vec![
            DamageBand::new(0.0, 25.0, 28.0),
            DamageBand::new(25.0, 60.0, 22.0),
            DamageBand::new(60.0, f32::INFINITY, 16.0),
        ],
        headshot_multiplier: 3.0,
        bullet_velocity_mps: 900.0,
        hipfire_spread: 4.0,
        ads_spread: 1.0,
        vertical_recoil: 0.6,
        recoil_recovery_ms: 350,
        ads_transition_ms: 250,
        sprint_to_fire_ms: 400,
        suppression_factor: 0.08,
        flinch_resistance: 0.0,
    }
}

#[test]
fn operator_id_rejects_nil() {
    assert!(OperatorId::new(0).is_none());
    assert!(OperatorId::new(1).is_some());
    assert!(OperatorId::nil().is_empty());
}

#[test]
fn operator_id_display_is_fixed_width_hex() {
    let id = OperatorId::new(0xabc).unwrap();
    assert_eq!(id.to_string().len(), 32);
}

#[test]
fn body_part_from_angle_round_trips_band_centers() {
    for part in [
        BodyPart::LowerTorso,
        BodyPart::UpperTorso,
        BodyPart::Neck,
        BodyPart::Head,
    ] {
        let angle = part.center();
        assert_eq!(BodyPart::from_angle(angle), Some(part));
    }
}

#[test]
fn body_part_from_angle_rejects_out_of_range() {
    assert_eq!(BodyPart::from_angle(-0.1), None);
    assert_eq!(BodyPart::from_angle(1.1), None);
    assert_eq!(BodyPart::from_angle(1.0), Some(BodyPart::Head));
}

#[test]
fn weapon_damage_falls_off_by_band() {
    let w = sample_weapon();
    assert_eq!(w.base_damage_at(10.0), 28.0);
    assert_eq!(w.base_damage_at(40.0), 22.0);
    assert_eq!(w.base_damage_at(1000.0), 16.0);
}

#[test]
fn weapon_headshot_multiplies_base_damage() {
    let w = sample_weapon();
    let base = w.base_damage_at(10.0);
    assert_eq!(w.damage_at(10.0, BodyPart::Head), base * w.headshot_multiplier);
}

#[test]
fn per_body_part_override_wins_over_base_damage_and_headshot_multiplier() {
    let mut w = sample_weapon();
    w.damage_bands[0].overrides.insert(BodyPart::Head, 999.0);
    assert_eq!(w.damage_at(10.0, BodyPart::Head), 999.0);
    assert_eq!(w.damage_at(10.0, BodyPart::UpperTorso), w.damage_bands[0].damage);
}
