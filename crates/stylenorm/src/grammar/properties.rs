//! The property grammar table.
//!
//! A fixed mapping from camelCase CSS property names to a composed
//! [`Rule`], grouped by value category. The table is built once per engine;
//! after host overrides are merged, every entry is unioned with the five
//! CSS-wide keywords (`null`, `initial`, `inherit`, `unset`, `revert`) in a
//! single post-processing pass.

use std::collections::HashMap;

use super::glob::{glob_match, validate_pattern};
use super::rule::Rule;
use crate::config::{LimitValue, PropLimit};
use crate::{Error, Result};

/// CSS named colors plus `transparent` and `currentColor`.
pub const NAMED_COLORS: &[&str] = &[
    "transparent", "currentColor",
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Border style keywords, shared with the shorthand decomposer.
pub const BORDER_STYLE_KEYWORDS: &[&str] = &[
    "none", "hidden", "solid", "dashed", "dotted", "double", "groove", "ridge", "inset", "outset",
];

const LENGTH_UNITS: &str = "px|em|rem|ex|ch|cap|ic|lh|rlh|vw|vh|vmin|vmax|vb|vi|svw|svh|lvw|lvh|dvw|dvh|cm|mm|q|in|pt|pc";

/// Category rules, compiled once and cloned into table entries.
struct Categories {
    number: Rule,
    length: Rule,
    length_pct: Rule,
    color: Rule,
    time: Rule,
    any: Rule,
    border_style: Rule,
    border_width: Rule,
    size: Rule,
    url_or_none: Rule,
    timing_fn: Rule,
}

fn pattern(regex: &str, message: &str) -> Result<Rule> {
    Rule::pattern(regex, message).map_err(|e| Error::invalid_rule(regex, e.to_string()))
}

fn build_categories() -> Result<Categories> {
    let math_fn = pattern(
        r"(?i)^(calc|min|max|clamp)\(.*\)$",
        "expected a math function expression",
    )?;
    let var_ref = pattern(
        r"^var\(--[A-Za-z0-9_-]+(\s*,[^)]*)?\)$",
        "expected a var() reference",
    )?;

    let length_dim = pattern(
        &format!(r"(?i)^[+-]?(\d+(\.\d+)?|\.\d+)({LENGTH_UNITS})$"),
        "expected a length ('10px', '1.5em', ...)",
    )?;
    let percentage = pattern(
        r"^[+-]?(\d+(\.\d+)?|\.\d+)%$",
        "expected a percentage ('50%')",
    )?;

    let number = Rule::number("expected a number");

    let length = Rule::union(vec![
        length_dim.clone(),
        number.clone(),
        math_fn.clone(),
        var_ref.clone(),
    ]);
    let length_pct = Rule::union(vec![
        length_dim.clone(),
        percentage.clone(),
        number.clone(),
        math_fn.clone(),
        var_ref.clone(),
    ]);

    let color = Rule::union(vec![
        pattern(
            r"(?i)^#([0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$",
            "expected a color ('#fff', 'rgb(...)', or a named color)",
        )?,
        pattern(
            r"(?i)^(rgb|rgba|hsl|hsla|hwb|lab|lch|oklab|oklch|color|color-mix|light-dark)\(.*\)$",
            "expected a color function",
        )?,
        Rule::one_of(NAMED_COLORS, "expected a named color"),
        var_ref.clone(),
    ]);

    let time = Rule::union(vec![
        pattern(
            r"(?i)^[+-]?(\d+(\.\d+)?|\.\d+)(s|ms)$",
            "expected a time value ('0.3s', '200ms')",
        )?,
        var_ref.clone(),
    ]);

    let any = Rule::union(vec![
        pattern(r"^\S(.*\S)?$", "expected a non-empty value")?,
        number.clone(),
    ]);

    let border_style = Rule::one_of(BORDER_STYLE_KEYWORDS, "expected a border style keyword");
    let border_width = Rule::union(vec![
        length.clone(),
        Rule::one_of(&["thin", "medium", "thick"], "expected a border width"),
    ]);

    let size = Rule::union(vec![
        length_pct.clone(),
        Rule::one_of(
            &["auto", "min-content", "max-content", "fit-content", "stretch"],
            "expected a sizing keyword",
        ),
        pattern(r"(?i)^fit-content\(.*\)$", "expected fit-content()")?,
    ]);

    let url_or_none = Rule::union(vec![
        Rule::Keyword("none"),
        pattern(
            r"(?i)^(url\(.*\)|(repeating-)?(linear|radial|conic)-gradient\(.*\)|image-set\(.*\))$",
            "expected 'none', a url(), or a gradient",
        )?,
        var_ref.clone(),
    ]);

    let timing_fn = Rule::union(vec![
        Rule::one_of(
            &["linear", "ease", "ease-in", "ease-out", "ease-in-out", "step-start", "step-end"],
            "expected a timing function",
        ),
        pattern(r"(?i)^(cubic-bezier|steps|linear)\(.*\)$", "expected a timing function")?,
    ]);

    Ok(Categories {
        number,
        length,
        length_pct,
        color,
        time,
        any,
        border_style,
        border_width,
        size,
        url_or_none,
        timing_fn,
    })
}

fn insert(rules: &mut HashMap<&'static str, Rule>, keys: &[&'static str], rule: &Rule) {
    for key in keys {
        rules.insert(key, rule.clone());
    }
}

/// The frozen per-property grammar table.
#[derive(Debug)]
pub struct PropertyTable {
    rules: HashMap<&'static str, Rule>,
}

impl PropertyTable {
    /// Build the raw table (before host overrides and the global-keyword
    /// pass). Fails only on a programmer error in a rule definition.
    pub fn build() -> Result<Self> {
        let c = build_categories()?;
        let mut rules: HashMap<&'static str, Rule> = HashMap::new();

        // === Box model: margins, paddings, insets ===
        let margin = Rule::union(vec![c.length_pct.clone(), Rule::Keyword("auto")]);
        insert(
            &mut rules,
            &[
                "margin", "marginTop", "marginRight", "marginBottom", "marginLeft",
                "marginBlock", "marginBlockStart", "marginBlockEnd",
                "marginInline", "marginInlineStart", "marginInlineEnd",
            ],
            &margin,
        );
        insert(
            &mut rules,
            &[
                "padding", "paddingTop", "paddingRight", "paddingBottom", "paddingLeft",
                "paddingBlock", "paddingBlockStart", "paddingBlockEnd",
                "paddingInline", "paddingInlineStart", "paddingInlineEnd",
            ],
            &c.length_pct,
        );
        insert(
            &mut rules,
            &[
                "top", "right", "bottom", "left",
                "inset", "insetBlock", "insetBlockStart", "insetBlockEnd",
                "insetInline", "insetInlineStart", "insetInlineEnd",
            ],
            &margin,
        );

        // === Sizing ===
        insert(
            &mut rules,
            &[
                "width", "height", "minWidth", "minHeight", "maxWidth", "maxHeight",
                "blockSize", "inlineSize", "minBlockSize", "minInlineSize",
                "maxBlockSize", "maxInlineSize",
                "containIntrinsicSize", "containIntrinsicWidth", "containIntrinsicHeight",
            ],
            &c.size,
        );
        rules.insert(
            "aspectRatio",
            Rule::union(vec![
                Rule::Keyword("auto"),
                c.number.clone(),
                pattern(
                    r"^\d+(\.\d+)?\s*/\s*\d+(\.\d+)?$",
                    "expected a ratio ('16 / 9')",
                )?,
            ]),
        );
        rules.insert("boxSizing", Rule::one_of(&["content-box", "border-box"], "expected a box-sizing keyword"));

        // === Borders ===
        insert(
            &mut rules,
            &[
                "borderWidth", "borderTopWidth", "borderRightWidth", "borderBottomWidth",
                "borderLeftWidth", "borderBlockWidth", "borderBlockStartWidth",
                "borderBlockEndWidth", "borderInlineWidth", "borderInlineStartWidth",
                "borderInlineEndWidth", "outlineWidth", "columnRuleWidth",
            ],
            &c.border_width,
        );
        insert(
            &mut rules,
            &[
                "borderStyle", "borderTopStyle", "borderRightStyle", "borderBottomStyle",
                "borderLeftStyle", "borderBlockStyle", "borderBlockStartStyle",
                "borderBlockEndStyle", "borderInlineStyle", "borderInlineStartStyle",
                "borderInlineEndStyle", "columnRuleStyle",
            ],
            &c.border_style,
        );
        rules.insert(
            "outlineStyle",
            Rule::union(vec![Rule::Keyword("auto"), c.border_style.clone()]),
        );
        insert(
            &mut rules,
            &[
                "borderColor", "borderTopColor", "borderRightColor", "borderBottomColor",
                "borderLeftColor", "borderBlockColor", "borderBlockStartColor",
                "borderBlockEndColor", "borderInlineColor", "borderInlineStartColor",
                "borderInlineEndColor", "outlineColor", "columnRuleColor",
            ],
            &c.color,
        );
        insert(
            &mut rules,
            &[
                "borderRadius", "borderTopLeftRadius", "borderTopRightRadius",
                "borderBottomLeftRadius", "borderBottomRightRadius",
                "borderStartStartRadius", "borderStartEndRadius",
                "borderEndStartRadius", "borderEndEndRadius",
            ],
            &c.length_pct,
        );
        let corner_shape = Rule::union(vec![
            Rule::one_of(
                &["round", "scoop", "bevel", "notch", "square", "squircle"],
                "expected a corner shape keyword",
            ),
            pattern(r"(?i)^superellipse\(.*\)$", "expected superellipse()")?,
        ]);
        insert(
            &mut rules,
            &[
                "cornerShape", "cornerTopLeftShape", "cornerTopRightShape",
                "cornerBottomLeftShape", "cornerBottomRightShape",
                "cornerStartStartShape", "cornerStartEndShape",
                "cornerEndStartShape", "cornerEndEndShape",
            ],
            &corner_shape,
        );
        rules.insert("outlineOffset", c.length.clone());
        rules.insert("borderCollapse", Rule::one_of(&["collapse", "separate"], "expected a border-collapse keyword"));
        rules.insert("borderSpacing", c.length.clone());

        // === Colors ===
        insert(
            &mut rules,
            &[
                "color", "backgroundColor", "textDecorationColor", "textEmphasisColor",
                "fill", "stroke", "floodColor", "stopColor", "lightingColor",
            ],
            &c.color,
        );
        let auto_or_color = Rule::union(vec![Rule::Keyword("auto"), c.color.clone()]);
        insert(&mut rules, &["caretColor", "accentColor"], &auto_or_color);
        rules.insert(
            "colorScheme",
            pattern(
                r"(?i)^(normal|light|dark|only)(\s+(light|dark|only))*$",
                "expected a color-scheme value",
            )?,
        );

        // === Layout: display & positioning ===
        rules.insert(
            "display",
            Rule::one_of(
                &[
                    "none", "block", "inline", "inline-block", "flex", "inline-flex",
                    "grid", "inline-grid", "flow-root", "contents", "table", "table-row",
                    "table-cell", "table-caption", "list-item", "ruby",
                ],
                "expected a display keyword",
            ),
        );
        rules.insert(
            "position",
            Rule::one_of(
                &["static", "relative", "absolute", "fixed", "sticky"],
                "expected a position keyword",
            ),
        );
        rules.insert(
            "float",
            Rule::one_of(
                &["left", "right", "none", "inline-start", "inline-end"],
                "expected a float keyword",
            ),
        );
        rules.insert(
            "clear",
            Rule::one_of(
                &["left", "right", "both", "none", "inline-start", "inline-end"],
                "expected a clear keyword",
            ),
        );
        rules.insert("visibility", Rule::one_of(&["visible", "hidden", "collapse"], "expected a visibility keyword"));
        rules.insert("zIndex", Rule::union(vec![c.number.clone(), Rule::Keyword("auto")]));
        rules.insert("isolation", Rule::one_of(&["auto", "isolate"], "expected an isolation keyword"));
        rules.insert(
            "contentVisibility",
            Rule::one_of(&["visible", "auto", "hidden"], "expected a content-visibility keyword"),
        );
        rules.insert("contain", c.any.clone());
        rules.insert("direction", Rule::one_of(&["ltr", "rtl"], "expected 'ltr' or 'rtl'"));
        rules.insert(
            "writingMode",
            Rule::one_of(
                &["horizontal-tb", "vertical-rl", "vertical-lr", "sideways-rl", "sideways-lr"],
                "expected a writing-mode keyword",
            ),
        );

        // === Overflow ===
        let overflow_kw = Rule::one_of(
            &["visible", "hidden", "clip", "scroll", "auto"],
            "expected an overflow keyword",
        );
        insert(&mut rules, &["overflow", "overflowX", "overflowY", "overflowBlock", "overflowInline"], &overflow_kw);
        rules.insert("textOverflow", Rule::one_of(&["clip", "ellipsis"], "expected 'clip' or 'ellipsis'"));
        let overscroll = Rule::one_of(&["auto", "contain", "none"], "expected an overscroll-behavior keyword");
        insert(
            &mut rules,
            &["overscrollBehavior", "overscrollBehaviorX", "overscrollBehaviorY"],
            &overscroll,
        );

        // === Flexbox ===
        rules.insert(
            "flexDirection",
            Rule::one_of(
                &["row", "row-reverse", "column", "column-reverse"],
                "expected a flex-direction keyword",
            ),
        );
        rules.insert("flexWrap", Rule::one_of(&["nowrap", "wrap", "wrap-reverse"], "expected a flex-wrap keyword"));
        insert(&mut rules, &["flexGrow", "flexShrink"], &c.number);
        rules.insert(
            "flexBasis",
            Rule::union(vec![c.size.clone(), Rule::Keyword("content")]),
        );
        rules.insert("order", c.number.clone());
        let content_align = Rule::one_of(
            &[
                "normal", "flex-start", "flex-end", "start", "end", "center", "stretch",
                "space-between", "space-around", "space-evenly", "baseline",
                "first baseline", "last baseline", "safe center", "unsafe center",
            ],
            "expected an alignment keyword",
        );
        insert(&mut rules, &["alignContent", "justifyContent"], &content_align);
        let item_align = Rule::one_of(
            &[
                "normal", "auto", "flex-start", "flex-end", "start", "end", "center",
                "stretch", "baseline", "self-start", "self-end", "first baseline",
                "last baseline", "safe center", "unsafe center", "left", "right",
            ],
            "expected an alignment keyword",
        );
        insert(
            &mut rules,
            &["alignItems", "alignSelf", "justifyItems", "justifySelf"],
            &item_align,
        );

        // === Gaps ===
        let gap = Rule::union(vec![c.length_pct.clone(), Rule::Keyword("normal")]);
        insert(&mut rules, &["gap", "rowGap", "columnGap"], &gap);

        // === Grid ===
        let grid_line = Rule::union(vec![
            Rule::Keyword("auto"),
            c.number.clone(),
            pattern(
                r"^(span\s+)?-?[A-Za-z0-9_-]+(\s+-?\d+)?$",
                "expected a grid line ('auto', a number, 'span 2', or an area name)",
            )?,
        ]);
        insert(
            &mut rules,
            &[
                "gridRowStart", "gridRowEnd", "gridColumnStart", "gridColumnEnd",
                "gridRow", "gridColumn", "gridArea",
            ],
            &grid_line,
        );
        insert(
            &mut rules,
            &[
                "gridTemplateRows", "gridTemplateColumns", "gridTemplateAreas",
                "gridAutoRows", "gridAutoColumns",
            ],
            &c.any,
        );
        rules.insert(
            "gridAutoFlow",
            Rule::one_of(
                &["row", "column", "dense", "row dense", "column dense"],
                "expected a grid-auto-flow keyword",
            ),
        );

        // === Typography ===
        rules.insert(
            "fontSize",
            Rule::union(vec![
                c.length_pct.clone(),
                Rule::one_of(
                    &[
                        "xx-small", "x-small", "small", "medium", "large", "x-large",
                        "xx-large", "xxx-large", "larger", "smaller",
                    ],
                    "expected a font-size keyword",
                ),
            ]),
        );
        rules.insert(
            "fontWeight",
            Rule::union(vec![
                Rule::range(1.0, 1000.0, "expected a font weight between 1 and 1000"),
                Rule::one_of(&["normal", "bold", "bolder", "lighter"], "expected a font-weight keyword"),
            ]),
        );
        rules.insert(
            "fontStyle",
            Rule::union(vec![
                Rule::one_of(&["normal", "italic", "oblique"], "expected a font-style keyword"),
                pattern(r"(?i)^oblique\s+-?\d+(\.\d+)?deg$", "expected 'oblique <angle>'")?,
            ]),
        );
        rules.insert(
            "fontVariant",
            Rule::one_of(
                &["normal", "none", "small-caps", "all-small-caps", "petite-caps", "titling-caps"],
                "expected a font-variant keyword",
            ),
        );
        rules.insert(
            "fontStretch",
            Rule::union(vec![
                Rule::one_of(
                    &[
                        "normal", "ultra-condensed", "extra-condensed", "condensed",
                        "semi-condensed", "semi-expanded", "expanded", "extra-expanded",
                        "ultra-expanded",
                    ],
                    "expected a font-stretch keyword",
                ),
                pattern(r"^\d+(\.\d+)?%$", "expected a percentage")?,
            ]),
        );
        rules.insert("fontFamily", c.any.clone());
        rules.insert("fontFeatureSettings", c.any.clone());
        rules.insert("fontVariationSettings", c.any.clone());
        rules.insert(
            "lineHeight",
            Rule::union(vec![c.length_pct.clone(), Rule::Keyword("normal")]),
        );
        let spacing = Rule::union(vec![c.length.clone(), Rule::Keyword("normal")]);
        insert(&mut rules, &["letterSpacing", "wordSpacing"], &spacing);
        rules.insert("textIndent", c.length_pct.clone());
        rules.insert(
            "textAlign",
            Rule::one_of(
                &["start", "end", "left", "right", "center", "justify", "match-parent"],
                "expected a text-align keyword",
            ),
        );
        rules.insert(
            "textAlignLast",
            Rule::one_of(
                &["auto", "start", "end", "left", "right", "center", "justify"],
                "expected a text-align-last keyword",
            ),
        );
        rules.insert(
            "textTransform",
            Rule::one_of(
                &["none", "capitalize", "uppercase", "lowercase", "full-width", "full-size-kana"],
                "expected a text-transform keyword",
            ),
        );
        rules.insert(
            "textDecorationLine",
            pattern(
                r"(?i)^(none|(underline|overline|line-through|blink)(\s+(underline|overline|line-through|blink))*)$",
                "expected a text-decoration-line value",
            )?,
        );
        rules.insert(
            "textDecorationStyle",
            Rule::one_of(&["solid", "double", "dotted", "dashed", "wavy"], "expected a text-decoration-style keyword"),
        );
        rules.insert(
            "textDecorationThickness",
            Rule::union(vec![
                Rule::one_of(&["auto", "from-font"], "expected 'auto' or 'from-font'"),
                c.length_pct.clone(),
            ]),
        );
        rules.insert(
            "textUnderlineOffset",
            Rule::union(vec![Rule::Keyword("auto"), c.length_pct.clone()]),
        );
        rules.insert(
            "textUnderlinePosition",
            Rule::one_of(&["auto", "under", "left", "right", "from-font"], "expected a text-underline-position keyword"),
        );
        rules.insert(
            "verticalAlign",
            Rule::union(vec![
                Rule::one_of(
                    &[
                        "baseline", "sub", "super", "text-top", "text-bottom",
                        "middle", "top", "bottom",
                    ],
                    "expected a vertical-align keyword",
                ),
                c.length_pct.clone(),
            ]),
        );
        rules.insert(
            "whiteSpace",
            Rule::one_of(
                &["normal", "pre", "pre-wrap", "pre-line", "nowrap", "break-spaces"],
                "expected a white-space keyword",
            ),
        );
        rules.insert(
            "wordBreak",
            Rule::one_of(&["normal", "break-all", "keep-all", "break-word"], "expected a word-break keyword"),
        );
        let overflow_wrap = Rule::one_of(&["normal", "break-word", "anywhere"], "expected an overflow-wrap keyword");
        insert(&mut rules, &["overflowWrap", "wordWrap"], &overflow_wrap);
        rules.insert(
            "textWrap",
            Rule::one_of(&["wrap", "nowrap", "balance", "pretty", "stable"], "expected a text-wrap keyword"),
        );
        rules.insert("hyphens", Rule::one_of(&["none", "manual", "auto"], "expected a hyphens keyword"));
        rules.insert(
            "lineBreak",
            Rule::one_of(&["auto", "loose", "normal", "strict", "anywhere"], "expected a line-break keyword"),
        );
        rules.insert("tabSize", Rule::union(vec![c.number.clone(), c.length.clone()]));
        rules.insert("content", c.any.clone());
        rules.insert("quotes", c.any.clone());
        rules.insert("textShadow", Rule::union(vec![Rule::Keyword("none"), c.any.clone()]));

        // === Background ===
        rules.insert("backgroundImage", c.url_or_none.clone());
        rules.insert(
            "backgroundRepeat",
            pattern(
                r"(?i)^(repeat-x|repeat-y|((repeat|no-repeat|space|round)(\s+(repeat|no-repeat|space|round))?))$",
                "expected a background-repeat value",
            )?,
        );
        rules.insert(
            "backgroundAttachment",
            Rule::one_of(&["scroll", "fixed", "local"], "expected a background-attachment keyword"),
        );
        rules.insert("backgroundPosition", c.any.clone());
        insert(&mut rules, &["backgroundPositionX", "backgroundPositionY"], &c.any);
        rules.insert(
            "backgroundSize",
            Rule::union(vec![
                Rule::one_of(&["cover", "contain", "auto"], "expected a background-size keyword"),
                c.any.clone(),
            ]),
        );
        let box_kw = Rule::one_of(
            &["border-box", "padding-box", "content-box", "text"],
            "expected a box keyword",
        );
        insert(&mut rules, &["backgroundClip", "backgroundOrigin"], &box_kw);
        rules.insert(
            "backgroundBlendMode",
            Rule::one_of(
                &[
                    "normal", "multiply", "screen", "overlay", "darken", "lighten",
                    "color-dodge", "color-burn", "hard-light", "soft-light", "difference",
                    "exclusion", "hue", "saturation", "color", "luminosity",
                ],
                "expected a blend mode",
            ),
        );

        // === Masking ===
        rules.insert("maskImage", c.url_or_none.clone());
        insert(
            &mut rules,
            &["maskPosition", "maskSize", "maskRepeat", "maskOrigin", "maskClip", "maskMode", "maskComposite"],
            &c.any,
        );
        rules.insert("clipPath", Rule::union(vec![Rule::Keyword("none"), c.any.clone()]));

        // === Effects ===
        rules.insert(
            "opacity",
            Rule::union(vec![
                Rule::range(0.0, 1.0, "expected a number between 0 and 1"),
                pattern(r"^(100|\d{1,2}(\.\d+)?)%$", "expected a percentage between 0% and 100%")?,
            ]),
        );
        rules.insert("boxShadow", Rule::union(vec![Rule::Keyword("none"), c.any.clone()]));
        let filter = Rule::union(vec![
            Rule::Keyword("none"),
            pattern(
                r"(?i)^((blur|brightness|contrast|drop-shadow|grayscale|hue-rotate|invert|opacity|saturate|sepia|url)\([^)]*\)\s*)+$",
                "expected 'none' or a filter function list",
            )?,
        ]);
        insert(&mut rules, &["filter", "backdropFilter"], &filter);
        rules.insert(
            "mixBlendMode",
            Rule::one_of(
                &[
                    "normal", "multiply", "screen", "overlay", "darken", "lighten",
                    "color-dodge", "color-burn", "hard-light", "soft-light", "difference",
                    "exclusion", "hue", "saturation", "color", "luminosity", "plus-lighter",
                ],
                "expected a blend mode",
            ),
        );

        // === Transforms ===
        rules.insert(
            "transform",
            Rule::union(vec![
                Rule::Keyword("none"),
                pattern(
                    r"(?i)^((matrix|matrix3d|perspective|rotate|rotate3d|rotatex|rotatey|rotatez|scale|scale3d|scalex|scaley|scalez|skew|skewx|skewy|translate|translate3d|translatex|translatey|translatez)\([^)]*\)\s*)+$",
                    "expected 'none' or a transform function list",
                )?,
            ]),
        );
        rules.insert("transformOrigin", c.any.clone());
        rules.insert("transformBox", Rule::one_of(
            &["content-box", "border-box", "fill-box", "stroke-box", "view-box"],
            "expected a transform-box keyword",
        ));
        rules.insert("transformStyle", Rule::one_of(&["flat", "preserve-3d"], "expected 'flat' or 'preserve-3d'"));
        rules.insert(
            "perspective",
            Rule::union(vec![Rule::Keyword("none"), c.length.clone()]),
        );
        rules.insert("perspectiveOrigin", c.any.clone());
        insert(&mut rules, &["rotate", "scale", "translate"], &c.any);

        // === Transitions & animations ===
        rules.insert("transitionProperty", c.any.clone());
        insert(
            &mut rules,
            &["transitionDuration", "transitionDelay", "animationDuration", "animationDelay"],
            &c.time,
        );
        insert(
            &mut rules,
            &["transitionTimingFunction", "animationTimingFunction"],
            &c.timing_fn,
        );
        rules.insert(
            "animationName",
            Rule::union(vec![
                Rule::Keyword("none"),
                pattern(r"^[A-Za-z_][A-Za-z0-9_-]*$", "expected an animation name")?,
            ]),
        );
        rules.insert(
            "animationIterationCount",
            Rule::union(vec![Rule::Keyword("infinite"), c.number.clone()]),
        );
        rules.insert(
            "animationDirection",
            Rule::one_of(
                &["normal", "reverse", "alternate", "alternate-reverse"],
                "expected an animation-direction keyword",
            ),
        );
        rules.insert(
            "animationFillMode",
            Rule::one_of(&["none", "forwards", "backwards", "both"], "expected an animation-fill-mode keyword"),
        );
        rules.insert(
            "animationPlayState",
            Rule::one_of(&["running", "paused"], "expected 'running' or 'paused'"),
        );

        // === Interaction ===
        rules.insert(
            "cursor",
            Rule::one_of(
                &[
                    "auto", "default", "none", "context-menu", "help", "pointer",
                    "progress", "wait", "cell", "crosshair", "text", "vertical-text",
                    "alias", "copy", "move", "no-drop", "not-allowed", "grab", "grabbing",
                    "all-scroll", "col-resize", "row-resize", "n-resize", "e-resize",
                    "s-resize", "w-resize", "ne-resize", "nw-resize", "se-resize",
                    "sw-resize", "ew-resize", "ns-resize", "nesw-resize", "nwse-resize",
                    "zoom-in", "zoom-out",
                ],
                "expected a cursor keyword",
            ),
        );
        rules.insert(
            "pointerEvents",
            Rule::one_of(
                &["auto", "none", "visiblePainted", "visibleFill", "visibleStroke", "visible", "painted", "fill", "stroke", "all"],
                "expected a pointer-events keyword",
            ),
        );
        rules.insert(
            "userSelect",
            Rule::one_of(&["auto", "text", "none", "contain", "all"], "expected a user-select keyword"),
        );
        rules.insert(
            "touchAction",
            Rule::one_of(
                &["auto", "none", "pan-x", "pan-y", "manipulation", "pinch-zoom"],
                "expected a touch-action keyword",
            ),
        );
        rules.insert(
            "resize",
            Rule::one_of(
                &["none", "both", "horizontal", "vertical", "block", "inline"],
                "expected a resize keyword",
            ),
        );
        rules.insert("willChange", c.any.clone());
        rules.insert("appearance", Rule::one_of(&["none", "auto"], "expected 'none' or 'auto'"));

        // === Scrolling ===
        rules.insert("scrollBehavior", Rule::one_of(&["auto", "smooth"], "expected 'auto' or 'smooth'"));
        insert(
            &mut rules,
            &[
                "scrollMargin", "scrollMarginTop", "scrollMarginRight",
                "scrollMarginBottom", "scrollMarginLeft",
            ],
            &c.length,
        );
        insert(
            &mut rules,
            &[
                "scrollPadding", "scrollPaddingTop", "scrollPaddingRight",
                "scrollPaddingBottom", "scrollPaddingLeft",
            ],
            &Rule::union(vec![c.length_pct.clone(), Rule::Keyword("auto")]),
        );
        rules.insert(
            "scrollSnapAlign",
            Rule::one_of(&["none", "start", "end", "center"], "expected a scroll-snap-align keyword"),
        );
        rules.insert(
            "scrollSnapType",
            pattern(
                r"(?i)^(none|(x|y|block|inline|both)(\s+(mandatory|proximity))?)$",
                "expected a scroll-snap-type value",
            )?,
        );
        rules.insert(
            "scrollSnapStop",
            Rule::one_of(&["normal", "always"], "expected 'normal' or 'always'"),
        );

        // === Lists, tables, columns ===
        rules.insert("listStyleType", c.any.clone());
        rules.insert(
            "listStylePosition",
            Rule::one_of(&["inside", "outside"], "expected 'inside' or 'outside'"),
        );
        rules.insert("listStyleImage", c.url_or_none.clone());
        rules.insert("tableLayout", Rule::one_of(&["auto", "fixed"], "expected 'auto' or 'fixed'"));
        rules.insert("emptyCells", Rule::one_of(&["show", "hide"], "expected 'show' or 'hide'"));
        rules.insert("captionSide", Rule::one_of(&["top", "bottom"], "expected 'top' or 'bottom'"));
        rules.insert(
            "columnCount",
            Rule::union(vec![Rule::Keyword("auto"), c.number.clone()]),
        );
        rules.insert(
            "columnWidth",
            Rule::union(vec![Rule::Keyword("auto"), c.length.clone()]),
        );
        rules.insert(
            "columnFill",
            Rule::one_of(&["auto", "balance"], "expected 'auto' or 'balance'"),
        );
        rules.insert(
            "columnSpan",
            Rule::one_of(&["none", "all"], "expected 'none' or 'all'"),
        );

        // === Fragmentation ===
        let break_kw = Rule::one_of(
            &["auto", "avoid", "always", "all", "page", "left", "right", "column"],
            "expected a break keyword",
        );
        insert(&mut rules, &["breakAfter", "breakBefore"], &break_kw);
        rules.insert(
            "breakInside",
            Rule::one_of(&["auto", "avoid", "avoid-page", "avoid-column"], "expected a break-inside keyword"),
        );
        rules.insert(
            "boxDecorationBreak",
            Rule::one_of(&["slice", "clone"], "expected 'slice' or 'clone'"),
        );

        // === Misc visual ===
        rules.insert("backfaceVisibility", Rule::one_of(&["visible", "hidden"], "expected 'visible' or 'hidden'"));
        rules.insert("objectFit", Rule::one_of(
            &["fill", "contain", "cover", "none", "scale-down"],
            "expected an object-fit keyword",
        ));
        rules.insert("objectPosition", c.any.clone());
        rules.insert(
            "imageRendering",
            Rule::one_of(
                &["auto", "smooth", "high-quality", "crisp-edges", "pixelated"],
                "expected an image-rendering keyword",
            ),
        );
        rules.insert("strokeWidth", c.length_pct.clone());
        rules.insert(
            "forcedColorAdjust",
            Rule::one_of(&["auto", "none"], "expected 'auto' or 'none'"),
        );

        Ok(Self { rules })
    }

    /// Merge host prop-limit overrides. Each matched entry's rule is
    /// replaced with the allowlist; the global-keyword pass still runs
    /// afterwards, so the CSS-wide keywords stay accepted.
    pub fn apply_limits(&mut self, limits: &[PropLimit]) -> Result<()> {
        for limit in limits {
            validate_pattern(&limit.pattern)?;
            if limit.allowed.is_empty() {
                return Err(Error::invalid_limit_rule(
                    &limit.pattern,
                    "the allowlist is empty; no value would be accepted",
                ));
            }

            let rule = limit_rule(limit);
            let matched: Vec<&'static str> = self
                .rules
                .keys()
                .copied()
                .filter(|k| glob_match(&limit.pattern, k))
                .collect();

            if matched.is_empty() {
                tracing::warn!(pattern = %limit.pattern, "property-limit pattern matches no known property");
                continue;
            }
            for key in matched {
                self.rules.insert(key, rule.clone());
            }
        }
        Ok(())
    }

    /// One-time post-processing pass: union every entry with the CSS-wide
    /// keywords. Runs once at construction, never per call.
    pub fn finalize(&mut self) {
        let global = global_keywords_rule();
        for rule in self.rules.values_mut() {
            let entry = std::mem::replace(rule, Rule::Null);
            // Entry first: on total failure, the entry's message wins.
            *rule = Rule::union(vec![entry, global.clone()]);
        }
    }

    /// Look up the rule for a property.
    pub fn rule(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    /// Whether a property is known.
    pub fn contains(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    /// All known property names (unordered).
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The five CSS-wide keywords implicitly accepted by every property.
pub fn global_keywords_rule() -> Rule {
    Rule::union(vec![
        Rule::Null,
        Rule::one_of(
            &["initial", "inherit", "unset", "revert"],
            "expected a CSS-wide keyword",
        ),
    ])
}

fn limit_rule(limit: &PropLimit) -> Rule {
    let mut words = vec![];
    let mut branches = vec![];
    for value in &limit.allowed {
        match value {
            LimitValue::Str(s) => words.push(s.clone()),
            LimitValue::Num(n) => branches.push(Rule::Range {
                min: *n,
                max: *n,
                message: limit.reason.clone(),
            }),
        }
    }
    if !words.is_empty() {
        let words_refs: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
        branches.insert(0, Rule::one_of(&words_refs, limit.reason.clone()));
    }
    Rule::union(branches)
}

/// The longhand trio a categorically unsupported shorthand maps to, in
/// width/style/color order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub width: &'static str,
    pub style: &'static str,
    pub color: &'static str,
}

/// Properties that are intercepted with a "use X/Y/Z instead" diagnostic
/// rather than a grammar check.
pub fn replacement_for(key: &str) -> Option<Replacement> {
    let r = match key {
        "border" => Replacement {
            width: "borderWidth",
            style: "borderStyle",
            color: "borderColor",
        },
        "borderTop" => Replacement {
            width: "borderTopWidth",
            style: "borderTopStyle",
            color: "borderTopColor",
        },
        "borderRight" => Replacement {
            width: "borderRightWidth",
            style: "borderRightStyle",
            color: "borderRightColor",
        },
        "borderBottom" => Replacement {
            width: "borderBottomWidth",
            style: "borderBottomStyle",
            color: "borderBottomColor",
        },
        "borderLeft" => Replacement {
            width: "borderLeftWidth",
            style: "borderLeftStyle",
            color: "borderLeftColor",
        },
        "borderBlock" => Replacement {
            width: "borderBlockWidth",
            style: "borderBlockStyle",
            color: "borderBlockColor",
        },
        "borderInline" => Replacement {
            width: "borderInlineWidth",
            style: "borderInlineStyle",
            color: "borderInlineColor",
        },
        "outline" => Replacement {
            width: "outlineWidth",
            style: "outlineStyle",
            color: "outlineColor",
        },
        _ => return None,
    };
    Some(r)
}
