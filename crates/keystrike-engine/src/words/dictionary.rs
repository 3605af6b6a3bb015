use super::Difficulty;

/// Built-in word list: (text, translation, difficulty).
pub(super) const BUILTIN: &[(&str, &str, Difficulty)] = &[
    ("PLANET", "行星", Difficulty::Easy),
    ("GALAXY", "银河系", Difficulty::Easy),
    ("ROCKET", "火箭", Difficulty::Easy),
    ("ALIEN", "外星人", Difficulty::Hard),
    ("LASER", "激光", Difficulty::Easy),
    ("SYSTEM", "系统", Difficulty::Hard),
    ("FUTURE", "未来", Difficulty::Hard),
    ("ATTACK", "攻击", Difficulty::Boss),
    ("COMBAT", "战斗", Difficulty::Hard),
    ("SHIELD", "护盾", Difficulty::Easy),
    ("WEAPON", "武器", Difficulty::Easy),
    ("TARGET", "目标", Difficulty::Easy),
];
