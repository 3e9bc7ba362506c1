//! Directional quad, corner quad, and block/inline pair families.

use super::{Decomposition, value_parts};

/// Longhand names for a side-oriented quad family (margin, padding, ...).
pub struct SideQuad {
    pub top: &'static str,
    pub right: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
    pub block: &'static str,
    pub inline: &'static str,
    pub inline_start: &'static str,
    pub inline_end: &'static str,
}

pub const MARGIN: SideQuad = SideQuad {
    top: "marginTop",
    right: "marginRight",
    bottom: "marginBottom",
    left: "marginLeft",
    block: "marginBlock",
    inline: "marginInline",
    inline_start: "marginInlineStart",
    inline_end: "marginInlineEnd",
};

pub const PADDING: SideQuad = SideQuad {
    top: "paddingTop",
    right: "paddingRight",
    bottom: "paddingBottom",
    left: "paddingLeft",
    block: "paddingBlock",
    inline: "paddingInline",
    inline_start: "paddingInlineStart",
    inline_end: "paddingInlineEnd",
};

pub const INSET: SideQuad = SideQuad {
    top: "top",
    right: "right",
    bottom: "bottom",
    left: "left",
    block: "insetBlock",
    inline: "insetInline",
    inline_start: "insetInlineStart",
    inline_end: "insetInlineEnd",
};

pub const BORDER_WIDTH: SideQuad = SideQuad {
    top: "borderTopWidth",
    right: "borderRightWidth",
    bottom: "borderBottomWidth",
    left: "borderLeftWidth",
    block: "borderBlockWidth",
    inline: "borderInlineWidth",
    inline_start: "borderInlineStartWidth",
    inline_end: "borderInlineEndWidth",
};

pub const BORDER_STYLE: SideQuad = SideQuad {
    top: "borderTopStyle",
    right: "borderRightStyle",
    bottom: "borderBottomStyle",
    left: "borderLeftStyle",
    block: "borderBlockStyle",
    inline: "borderInlineStyle",
    inline_start: "borderInlineStartStyle",
    inline_end: "borderInlineEndStyle",
};

pub const BORDER_COLOR: SideQuad = SideQuad {
    top: "borderTopColor",
    right: "borderRightColor",
    bottom: "borderBottomColor",
    left: "borderLeftColor",
    block: "borderBlockColor",
    inline: "borderInlineColor",
    inline_start: "borderInlineStartColor",
    inline_end: "borderInlineEndColor",
};

/// Longhand names for a corner-oriented quad family (border-radius,
/// corner-shape). `logical` is start-start, start-end, end-end, end-start
/// order, pairing with top-left, top-right, bottom-right, bottom-left.
pub struct CornerQuad {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_right: &'static str,
    pub bottom_left: &'static str,
    pub logical: [&'static str; 4],
}

pub const BORDER_RADIUS: CornerQuad = CornerQuad {
    top_left: "borderTopLeftRadius",
    top_right: "borderTopRightRadius",
    bottom_right: "borderBottomRightRadius",
    bottom_left: "borderBottomLeftRadius",
    logical: [
        "borderStartStartRadius",
        "borderStartEndRadius",
        "borderEndEndRadius",
        "borderEndStartRadius",
    ],
};

pub const CORNER_SHAPE: CornerQuad = CornerQuad {
    top_left: "cornerTopLeftShape",
    top_right: "cornerTopRightShape",
    bottom_right: "cornerBottomRightShape",
    bottom_left: "cornerBottomLeftShape",
    logical: [
        "cornerStartStartShape",
        "cornerStartEndShape",
        "cornerEndEndShape",
        "cornerEndStartShape",
    ],
};

/// Expand a side quad using CSS defaulting `[top, right=top, bottom=top,
/// left=right]`.
pub fn expand_sides(
    family: &SideQuad,
    key: &str,
    value: &str,
    prefer_inline: bool,
) -> Decomposition {
    let tok = value_parts(value, true);
    if tok.has_top_level_comma || tok.has_top_level_slash {
        return Decomposition::CannotFix;
    }

    let parts: Vec<&str> = tok.parts.iter().map(|p| p.text.as_str()).collect();
    match parts.len() {
        0 | 1 => Decomposition::unchanged(key, value),
        2..=4 => {
            let top = parts[0];
            let right = parts.get(1).copied().unwrap_or(top);
            let bottom = parts.get(2).copied().unwrap_or(top);
            let left = parts.get(3).copied().unwrap_or(right);

            if top == right && top == bottom && top == left {
                // Equal-valued quad collapses to the base property.
                return Decomposition::unchanged(key, top);
            }
            if top == bottom && left == right {
                return Decomposition::Entries(vec![
                    (family.block.to_string(), top.to_string()),
                    (family.inline.to_string(), right.to_string()),
                ]);
            }

            let (right_key, left_key) = if prefer_inline {
                (family.inline_end, family.inline_start)
            } else {
                (family.right, family.left)
            };
            Decomposition::Entries(vec![
                (family.top.to_string(), top.to_string()),
                (right_key.to_string(), right.to_string()),
                (family.bottom.to_string(), bottom.to_string()),
                (left_key.to_string(), left.to_string()),
            ])
        }
        _ => Decomposition::CannotFix,
    }
}

/// Expand a corner quad using CSS defaulting `[tl, tr=tl, br=tl, bl=tr]`.
///
/// Elliptical two-axis values (`10px / 20px`) are not decomposable.
pub fn expand_corners(
    family: &CornerQuad,
    key: &str,
    value: &str,
    prefer_inline: bool,
) -> Decomposition {
    let tok = value_parts(value, true);
    if tok.has_top_level_comma || tok.has_top_level_slash {
        return Decomposition::CannotFix;
    }

    let parts: Vec<&str> = tok.parts.iter().map(|p| p.text.as_str()).collect();
    match parts.len() {
        0 | 1 => Decomposition::unchanged(key, value),
        2..=4 => {
            let tl = parts[0];
            let tr = parts.get(1).copied().unwrap_or(tl);
            let br = parts.get(2).copied().unwrap_or(tl);
            let bl = parts.get(3).copied().unwrap_or(tr);

            if tl == tr && tl == br && tl == bl {
                return Decomposition::unchanged(key, tl);
            }

            let keys = if prefer_inline {
                family.logical
            } else {
                [family.top_left, family.top_right, family.bottom_right, family.bottom_left]
            };
            Decomposition::Entries(vec![
                (keys[0].to_string(), tl.to_string()),
                (keys[1].to_string(), tr.to_string()),
                (keys[2].to_string(), br.to_string()),
                (keys[3].to_string(), bl.to_string()),
            ])
        }
        _ => Decomposition::CannotFix,
    }
}

/// Expand a block/inline (or axis) pair: one value stays on the base
/// property, two distinct values become start/end entries.
pub fn expand_pair(start_key: &str, end_key: &str, key: &str, value: &str) -> Decomposition {
    let tok = value_parts(value, true);
    if tok.has_top_level_comma || tok.has_top_level_slash {
        return Decomposition::CannotFix;
    }

    let parts: Vec<&str> = tok.parts.iter().map(|p| p.text.as_str()).collect();
    match parts.len() {
        0 | 1 => Decomposition::unchanged(key, value),
        2 if parts[0] == parts[1] => Decomposition::unchanged(key, parts[0]),
        2 => Decomposition::Entries(vec![
            (start_key.to_string(), parts[0].to_string()),
            (end_key.to_string(), parts[1].to_string()),
        ]),
        _ => Decomposition::CannotFix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_distinct_values_expand_physically() {
        let result = expand_sides(&MARGIN, "margin", "10px 12px 13px 14px", false);
        assert_eq!(
            result.entries().unwrap(),
            [
                ("marginTop".to_string(), "10px".to_string()),
                ("marginRight".to_string(), "12px".to_string()),
                ("marginBottom".to_string(), "13px".to_string()),
                ("marginLeft".to_string(), "14px".to_string()),
            ]
        );
    }

    #[test]
    fn four_distinct_values_expand_logically() {
        let result = expand_sides(&MARGIN, "margin", "1px 2px 3px 4px", true);
        assert_eq!(
            result.entries().unwrap(),
            [
                ("marginTop".to_string(), "1px".to_string()),
                ("marginInlineEnd".to_string(), "2px".to_string()),
                ("marginBottom".to_string(), "3px".to_string()),
                ("marginInlineStart".to_string(), "4px".to_string()),
            ]
        );
    }

    #[test]
    fn vertical_horizontal_pairing_collapses_to_block_inline() {
        let result = expand_sides(&MARGIN, "margin", "10em 1em", false);
        assert_eq!(
            result.entries().unwrap(),
            [
                ("marginBlock".to_string(), "10em".to_string()),
                ("marginInline".to_string(), "1em".to_string()),
            ]
        );
    }

    #[test]
    fn three_values_with_pairing_collapse() {
        // top == bottom only when the third value repeats the first.
        let result = expand_sides(&MARGIN, "margin", "5px 8px 5px", false);
        assert_eq!(
            result.entries().unwrap(),
            [
                ("marginBlock".to_string(), "5px".to_string()),
                ("marginInline".to_string(), "8px".to_string()),
            ]
        );
    }

    #[test]
    fn equal_quad_collapses_to_base() {
        let result = expand_sides(&BORDER_WIDTH, "borderWidth", "4px 4px 4px 4px", false);
        assert_eq!(result.entries().unwrap(), [("borderWidth".to_string(), "4px".to_string())]);
    }

    #[test]
    fn single_value_is_unchanged() {
        let result = expand_sides(&MARGIN, "margin", "10px", false);
        assert_eq!(result.entries().unwrap(), [("margin".to_string(), "10px".to_string())]);
    }

    #[test]
    fn too_many_values_cannot_fix() {
        let result = expand_sides(&MARGIN, "margin", "1px 2px 3px 4px 5px", false);
        assert!(result.is_cannot_fix());
    }

    #[test]
    fn slash_in_radius_cannot_fix() {
        let result = expand_corners(&BORDER_RADIUS, "borderRadius", "10px / 20px", false);
        assert!(result.is_cannot_fix());
    }

    #[test]
    fn radius_defaulting_pairs_bottom_left_with_top_right() {
        let result = expand_corners(&BORDER_RADIUS, "borderRadius", "1px 2px", false);
        assert_eq!(
            result.entries().unwrap(),
            [
                ("borderTopLeftRadius".to_string(), "1px".to_string()),
                ("borderTopRightRadius".to_string(), "2px".to_string()),
                ("borderBottomRightRadius".to_string(), "1px".to_string()),
                ("borderBottomLeftRadius".to_string(), "2px".to_string()),
            ]
        );
    }

    #[test]
    fn radius_logical_corners() {
        let result = expand_corners(&BORDER_RADIUS, "borderRadius", "1px 2px 3px 4px", true);
        let keys: Vec<&str> = result.entries().unwrap().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "borderStartStartRadius",
                "borderStartEndRadius",
                "borderEndEndRadius",
                "borderEndStartRadius",
            ]
        );
    }

    #[test]
    fn pair_expansion() {
        let result = expand_pair("marginInlineStart", "marginInlineEnd", "marginInline", "10em 1em");
        assert_eq!(
            result.entries().unwrap(),
            [
                ("marginInlineStart".to_string(), "10em".to_string()),
                ("marginInlineEnd".to_string(), "1em".to_string()),
            ]
        );
    }

    #[test]
    fn equal_pair_collapses() {
        let result = expand_pair("overflowX", "overflowY", "overflow", "hidden hidden");
        assert_eq!(result.entries().unwrap(), [("overflow".to_string(), "hidden".to_string())]);
    }

    #[test]
    fn functions_stay_atomic_in_quads() {
        let result = expand_sides(&PADDING, "padding", "calc(1em + 2px) 4px", false);
        assert_eq!(
            result.entries().unwrap(),
            [
                ("paddingBlock".to_string(), "calc(1em + 2px)".to_string()),
                ("paddingInline".to_string(), "4px".to_string()),
            ]
        );
    }
}
