//! Deprecated physical property names and their logical replacements.
//!
//! Looked up standalone to suggest a rename, and as a pre-pass before
//! shorthand classification so `marginHorizontal` runs through the
//! `marginInline` decomposer.

/// Logical equivalent of a deprecated physical property name, if any.
pub fn legacy_name_mapping(key: &str) -> Option<&'static str> {
    let mapped = match key {
        "marginStart" => "marginInlineStart",
        "marginEnd" => "marginInlineEnd",
        "marginHorizontal" => "marginInline",
        "marginVertical" => "marginBlock",

        "paddingStart" => "paddingInlineStart",
        "paddingEnd" => "paddingInlineEnd",
        "paddingHorizontal" => "paddingInline",
        "paddingVertical" => "paddingBlock",

        "start" => "insetInlineStart",
        "end" => "insetInlineEnd",

        "borderStart" => "borderInlineStart",
        "borderEnd" => "borderInlineEnd",
        "borderStartWidth" => "borderInlineStartWidth",
        "borderStartStyle" => "borderInlineStartStyle",
        "borderStartColor" => "borderInlineStartColor",
        "borderEndWidth" => "borderInlineEndWidth",
        "borderEndStyle" => "borderInlineEndStyle",
        "borderEndColor" => "borderInlineEndColor",

        "borderHorizontal" => "borderInline",
        "borderHorizontalWidth" => "borderInlineWidth",
        "borderHorizontalStyle" => "borderInlineStyle",
        "borderHorizontalColor" => "borderInlineColor",
        "borderVertical" => "borderBlock",
        "borderVerticalWidth" => "borderBlockWidth",
        "borderVerticalStyle" => "borderBlockStyle",
        "borderVerticalColor" => "borderBlockColor",

        "borderTopStartRadius" => "borderStartStartRadius",
        "borderTopEndRadius" => "borderStartEndRadius",
        "borderBottomStartRadius" => "borderEndStartRadius",
        "borderBottomEndRadius" => "borderEndEndRadius",

        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_margin_aliases() {
        assert_eq!(legacy_name_mapping("marginHorizontal"), Some("marginInline"));
        assert_eq!(legacy_name_mapping("marginStart"), Some("marginInlineStart"));
    }

    #[test]
    fn maps_border_radius_corners() {
        assert_eq!(legacy_name_mapping("borderTopStartRadius"), Some("borderStartStartRadius"));
        assert_eq!(legacy_name_mapping("borderBottomEndRadius"), Some("borderEndEndRadius"));
    }

    #[test]
    fn maps_bare_start_end_to_inset() {
        assert_eq!(legacy_name_mapping("start"), Some("insetInlineStart"));
        assert_eq!(legacy_name_mapping("end"), Some("insetInlineEnd"));
    }

    #[test]
    fn unknown_names_have_no_mapping() {
        assert_eq!(legacy_name_mapping("margin"), None);
        assert_eq!(legacy_name_mapping("marginInline"), None);
    }
}
