use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::engine::compose::{interpolate, join_values};
use crate::engine::{Inflection, Operation, TextContext, TextError};
use crate::global;
use crate::locale::{HookTiming, Variant};

use super::{Value, VariantId};

/// An immutable container of one or more string values bound to a locale
/// variant.
///
/// Every transform returns a new `Text` and leaves the original untouched.
/// Transforms apply to each value independently and either succeed for all
/// values or fail without producing a text.
///
/// # Example
///
/// ```
/// use textform::Text;
///
/// let text = Text::new("thisIsATest").unwrap();
/// assert_eq!(text.underscorize().unwrap().to_string(), "this_is_a_test");
///
/// let boxes = Text::new("box").unwrap().pluralize(2).unwrap();
/// assert_eq!(boxes.to_string(), "boxes");
///
/// let list = Text::new(vec!["a", "b", "c"]).unwrap();
/// assert_eq!(list.to_string(), "a, b and c");
/// ```
#[derive(Clone)]
pub struct Text {
    values: Vec<String>,
    variant: Arc<dyn Variant>,
    /// Cache identity, derived from the locale the variant was resolved for.
    id: VariantId,
    context: Arc<TextContext>,
}

impl Text {
    /// Create a text for the base (`en_us`) locale.
    ///
    /// Shares the transform cache and compose hooks of the global registry.
    pub fn new(value: impl Into<Value>) -> Result<Self, TextError> {
        global::with_registry(|registry| registry.create_base(value))
    }

    /// Create a text bound to `variant`, sharing `context`.
    ///
    /// Cached transforms are keyed by the variant's own locale name, so
    /// variants sharing one context must report distinct names. Texts from
    /// [`LocaleRegistry::create`](crate::LocaleRegistry::create) are keyed by
    /// the locale they were mapped under instead.
    pub fn with_variant(
        value: impl Into<Value>,
        variant: Arc<dyn Variant>,
        context: Arc<TextContext>,
    ) -> Result<Self, TextError> {
        let id = variant.id();
        Self::resolved(value, variant, id, context)
    }

    pub(crate) fn resolved(
        value: impl Into<Value>,
        variant: Arc<dyn Variant>,
        id: VariantId,
        context: Arc<TextContext>,
    ) -> Result<Self, TextError> {
        Ok(Self {
            values: normalize(value.into())?,
            variant,
            id,
            context,
        })
    }

    /// A new text sharing this one's variant and context.
    fn derive(&self, values: Vec<String>) -> Self {
        Self {
            values,
            variant: Arc::clone(&self.variant),
            id: self.id,
            context: Arc::clone(&self.context),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a text holds at least one value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn locale(&self) -> &str {
        self.variant.locale()
    }

    pub fn variant(&self) -> &Arc<dyn Variant> {
        &self.variant
    }

    /// Identity under which this text's transforms are cached.
    pub fn variant_id(&self) -> VariantId {
        self.id
    }

    // =========================================================================
    // Case Conversion
    // =========================================================================

    /// Convert every value to `camelCase`, or `UpperCamelCase` if `upper`.
    pub fn camelize(&self, upper: bool) -> Result<Self, TextError> {
        self.convert(Operation::Camelize { upper }, |variant, token| {
            variant.camelize_token(token, upper)
        })
    }

    /// Convert every value to `underscore_notation`.
    pub fn underscorize(&self) -> Result<Self, TextError> {
        self.convert(Operation::Underscorize, |variant, token| {
            variant.underscorize_token(token)
        })
    }

    /// Convert every value to `dash-notation`.
    pub fn dashize(&self) -> Result<Self, TextError> {
        self.convert(Operation::Dashize, |variant, token| variant.dashize_token(token))
    }

    /// Convert every value to its human-readable form.
    ///
    /// The base variant has no humanization rules and returns values as-is.
    pub fn humanize(&self) -> Result<Self, TextError> {
        self.convert(Operation::Humanize, |variant, token| {
            variant.humanize_token(token)
        })
    }

    fn convert(
        &self,
        operation: Operation,
        transform: impl Fn(&dyn Variant, &str) -> Result<String, TextError>,
    ) -> Result<Self, TextError> {
        let cache = self.context.cache();
        let id = self.id;
        let mut values = Vec::with_capacity(self.values.len());
        for value in &self.values {
            let converted = cache.get_or_insert_with(operation, id, value, || {
                transform(self.variant.as_ref(), value).map(Some)
            })?;
            values.push(converted.unwrap_or_else(|| value.clone()));
        }
        Ok(self.derive(values))
    }

    // =========================================================================
    // Inflection
    // =========================================================================

    /// Pluralize every value for `quantity` items.
    ///
    /// Quantities below the variant's lowest rule tier (1 and 0 for English)
    /// have no plural rules and fail with [`TextError::NoRuleTier`].
    pub fn pluralize(&self, quantity: usize) -> Result<Self, TextError> {
        let tier = self
            .variant
            .rules()
            .tier_threshold(quantity)
            .ok_or(TextError::NoRuleTier { quantity })?;
        self.inflect(Operation::Pluralize { tier }, Inflection::Pluralize, |variant, token| {
            variant.pluralize_token(token, quantity)
        })
    }

    /// Pluralize every value for as many items as `items` holds.
    ///
    /// ```
    /// use textform::Text;
    ///
    /// let files = ["a.txt", "b.txt", "c.txt"];
    /// let label = Text::new("file").unwrap().pluralize_for(&files).unwrap();
    /// assert_eq!(label.to_string(), "files");
    /// ```
    pub fn pluralize_for<T>(&self, items: &[T]) -> Result<Self, TextError> {
        self.pluralize(items.len())
    }

    /// Like [`pluralize`](Self::pluralize), but returns `None` instead of
    /// failing when no rule applies.
    pub fn maybe_pluralize(&self, quantity: usize) -> Result<Option<Self>, TextError> {
        soften(self.pluralize(quantity))
    }

    /// Singularize every value.
    pub fn singularize(&self) -> Result<Self, TextError> {
        self.inflect(Operation::Singularize, Inflection::Singularize, |variant, token| {
            variant.singularize_token(token)
        })
    }

    /// Like [`singularize`](Self::singularize), but returns `None` instead of
    /// failing when no rule applies.
    pub fn maybe_singularize(&self) -> Result<Option<Self>, TextError> {
        soften(self.singularize())
    }

    fn inflect(
        &self,
        operation: Operation,
        inflection: Inflection,
        transform: impl Fn(&dyn Variant, &str) -> Result<Option<String>, TextError>,
    ) -> Result<Self, TextError> {
        let cache = self.context.cache();
        let id = self.id;
        let mut values = Vec::with_capacity(self.values.len());
        for value in &self.values {
            let inflected = cache.get_or_insert_with(operation, id, value, || {
                transform(self.variant.as_ref(), value)
            })?;
            let Some(inflected) = inflected else {
                return Err(TextError::NoRule {
                    operation: inflection,
                    token: value.clone(),
                });
            };
            values.push(inflected);
        }
        Ok(self.derive(values))
    }

    /// Choose between a singular and plural form using this text's value
    /// count as the quantity.
    ///
    /// With one value the singular form is returned. Without an explicit
    /// plural form the singular is pluralized for the quantity. Otherwise
    /// `%d` in the plural form is replaced by the quantity, spelled out for
    /// single digits when `single_digit_words` is set.
    ///
    /// ```
    /// use textform::Text;
    ///
    /// let files = Text::new(vec!["a.txt", "b.txt"]).unwrap();
    /// let label = files.inflect_on_quantity("file", Some("%d files"), true).unwrap();
    /// assert_eq!(label.to_string(), "two files");
    /// ```
    pub fn inflect_on_quantity(
        &self,
        singular: &str,
        plural: Option<&str>,
        single_digit_words: bool,
    ) -> Result<Self, TextError> {
        let quantity = self.len();
        let singular = self.derive(vec![singular.to_string()]);

        if quantity == 1 {
            return Ok(singular);
        }
        let Some(plural) = plural else {
            return singular.pluralize(quantity);
        };
        if !plural.contains("%d") {
            return Ok(self.derive(vec![plural.to_string()]));
        }

        let spelled = if single_digit_words && quantity < 10 {
            self.variant.rules().digit_word(quantity)
        } else {
            None
        };
        let replacement = match spelled {
            Some(word) => self.derive(vec![word.to_string()]).compose(None, &[])?,
            None => quantity.to_string(),
        };
        Ok(self.derive(vec![plural.replace("%d", &replacement)]))
    }

    // =========================================================================
    // Join and Compose
    // =========================================================================

    /// Join all values into one.
    ///
    /// Defaults to the variant's separators (`", "` and `"and"` in English).
    pub fn join(&self, separator: Option<&str>, final_separator: Option<&str>) -> Self {
        let separator = separator.unwrap_or(self.variant.join_separator());
        let final_separator = final_separator.unwrap_or(self.variant.final_join_separator());
        self.derive(join_values(
            &self.values,
            separator,
            final_separator,
            self.variant.right_to_left(),
        ))
    }

    /// Compose a message from this text, interpolating `components`.
    ///
    /// The registered pre hook is applied to the value (a single string, or
    /// the list of values for multi-value texts) and to each component with
    /// the message `domain`. A single-string result is interpolated
    /// printf-style; a list is joined. The post hook is applied last.
    /// A single list component is spread into the component list.
    ///
    /// Supported conversions are `b c d u o x X f F e E g G s`, with
    /// positional arguments, flags, width and precision.
    ///
    /// ```
    /// use textform::Text;
    ///
    /// let greeting = Text::new("Hello %s").unwrap();
    /// assert_eq!(greeting.compose(None, &["World".into()]).unwrap(), "Hello World");
    /// ```
    pub fn compose(&self, domain: Option<&str>, components: &[Value]) -> Result<String, TextError> {
        let domain = domain.unwrap_or(self.variant.default_domain());

        let mut value = match self.values.as_slice() {
            [single] => Value::String(single.clone()),
            values => Value::List(values.iter().map(Value::from).collect()),
        };
        let mut components = match components {
            [Value::List(items)] => items.clone(),
            _ => components.to_vec(),
        };

        if let Some(pre) = self.context.hook(HookTiming::Pre) {
            value = pre(value, domain);
            components = components
                .into_iter()
                .map(|component| pre(component, domain))
                .collect();
        }

        let message = match value {
            Value::List(mut items) if items.len() == 1 => {
                interpolate(&items.remove(0).to_string(), &components)?
            }
            Value::List(items) => {
                let values: Vec<String> = items.iter().map(ToString::to_string).collect();
                let joined = join_values(
                    &values,
                    self.variant.join_separator(),
                    self.variant.final_join_separator(),
                    self.variant.right_to_left(),
                );
                joined.concat()
            }
            scalar => interpolate(&scalar.to_string(), &components)?,
        };

        Ok(match self.context.hook(HookTiming::Post) {
            Some(post) => post(Value::String(message), domain).to_string(),
            None => message,
        })
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.join(None, None).values.concat())
    }
}

impl Debug for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Text")
            .field("values", &self.values)
            .field("locale", &self.variant.locale())
            .finish()
    }
}

/// Normalize a value into a non-empty list of strings.
///
/// Single-element lists collapse to their element.
fn normalize(value: Value) -> Result<Vec<String>, TextError> {
    match value {
        Value::List(mut items) => match items.len() {
            0 => Err(TextError::InvalidValue {
                reason: "empty list".to_string(),
            }),
            1 => normalize(items.remove(0)),
            _ => items
                .iter()
                .map(|item| {
                    item.scalar_text().ok_or_else(|| TextError::InvalidValue {
                        reason: "nested list in a multi-value list".to_string(),
                    })
                })
                .collect(),
        },
        scalar => Ok(vec![scalar.to_string()]),
    }
}

/// Turn "no rule applies" failures into `None`.
fn soften(result: Result<Text, TextError>) -> Result<Option<Text>, TextError> {
    match result {
        Ok(text) => Ok(Some(text)),
        Err(TextError::NoRule { .. } | TextError::NoRuleTier { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
