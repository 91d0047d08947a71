//! Element attributes and the layered configuration cascade.

/// Fully resolved attribute set for a drawable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub with_label: bool,
    pub layer: String,
    pub use_direction: bool,
    pub stroke_width: f64,
    pub radius: f64,
    pub text: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Attributes {
    /// Resolves one merged attribute set from three layers, in precedence
    /// order: explicit call-site overrides, then per-element-type board
    /// defaults, then the generic element defaults.
    #[must_use]
    pub fn resolve(call: &AttrOverrides, per_type: &AttrOverrides, defaults: &Self) -> Self {
        let pick = |c: Option<&String>, t: Option<&String>| c.or(t).cloned();

        Self {
            with_label: call
                .with_label
                .or(per_type.with_label)
                .unwrap_or(defaults.with_label),
            layer: pick(call.layer.as_ref(), per_type.layer.as_ref())
                .unwrap_or_else(|| defaults.layer.clone()),
            use_direction: call
                .use_direction
                .or(per_type.use_direction)
                .unwrap_or(defaults.use_direction),
            stroke_width: call
                .stroke_width
                .or(per_type.stroke_width)
                .unwrap_or(defaults.stroke_width),
            radius: call.radius.or(per_type.radius).unwrap_or(defaults.radius),
            text: pick(call.text.as_ref(), per_type.text.as_ref()).or_else(|| defaults.text.clone()),
            id: pick(call.id.as_ref(), per_type.id.as_ref()).or_else(|| defaults.id.clone()),
            name: pick(call.name.as_ref(), per_type.name.as_ref())
                .or_else(|| defaults.name.clone()),
        }
    }

    /// Re-expresses a resolved attribute set as call-site overrides with
    /// every field set. Used when one factory delegates to another and the
    /// already-merged attributes must win over the delegate's own defaults.
    #[must_use]
    pub fn into_overrides(self) -> AttrOverrides {
        AttrOverrides {
            with_label: Some(self.with_label),
            layer: Some(self.layer),
            use_direction: Some(self.use_direction),
            stroke_width: Some(self.stroke_width),
            radius: Some(self.radius),
            text: self.text,
            id: self.id,
            name: self.name,
        }
    }
}

/// Partial attribute set; unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrOverrides {
    pub with_label: Option<bool>,
    pub layer: Option<String>,
    pub use_direction: Option<bool>,
    pub stroke_width: Option<f64>,
    pub radius: Option<f64>,
    pub text: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Board-wide configuration: generic element defaults plus per-type
/// default layers for the construct factories.
#[derive(Debug, Clone)]
pub struct BoardOptions {
    /// Generic defaults applied to every element kind.
    pub elements: Attributes,
    /// Sector-specific defaults.
    pub sector: AttrOverrides,
    /// Angle-specific defaults.
    pub angle: AttrOverrides,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            elements: Attributes {
                with_label: true,
                layer: "elements".to_owned(),
                use_direction: false,
                stroke_width: 2.0,
                radius: 1.0,
                text: None,
                id: None,
                name: None,
            },
            sector: AttrOverrides {
                layer: Some("sector".to_owned()),
                ..AttrOverrides::default()
            },
            angle: AttrOverrides {
                layer: Some("angle".to_owned()),
                radius: Some(1.0),
                ..AttrOverrides::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_defaults_apply_when_nothing_is_set() {
        let opts = BoardOptions::default();
        let merged = Attributes::resolve(
            &AttrOverrides::default(),
            &AttrOverrides::default(),
            &opts.elements,
        );
        assert!(merged.with_label);
        assert!(!merged.use_direction);
        assert_eq!(merged.layer, "elements");
        assert!((merged.stroke_width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn per_type_layer_beats_generic() {
        let opts = BoardOptions::default();
        let merged = Attributes::resolve(&AttrOverrides::default(), &opts.sector, &opts.elements);
        assert_eq!(merged.layer, "sector");
    }

    #[test]
    fn call_site_beats_per_type() {
        let opts = BoardOptions::default();
        let call = AttrOverrides {
            layer: Some("overlay".to_owned()),
            stroke_width: Some(4.5),
            ..AttrOverrides::default()
        };
        let merged = Attributes::resolve(&call, &opts.sector, &opts.elements);
        assert_eq!(merged.layer, "overlay");
        assert!((merged.stroke_width - 4.5).abs() < f64::EPSILON);
        // Untouched fields still fall through.
        assert!(merged.with_label);
    }

    #[test]
    fn into_overrides_pins_every_field() {
        let opts = BoardOptions::default();
        let merged = Attributes::resolve(&AttrOverrides::default(), &opts.angle, &opts.elements);
        let pinned = merged.clone().into_overrides();
        // Re-resolving against different defaults must change nothing.
        let reresolved = Attributes::resolve(&pinned, &opts.sector, &opts.elements);
        assert_eq!(reresolved.layer, merged.layer);
        assert!((reresolved.radius - merged.radius).abs() < f64::EPSILON);
    }
}
