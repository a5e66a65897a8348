//! Admin form models: raw text as typed, validated into request drafts.
//!
//! DESIGN
//! ======
//! Pages keep one string signal per input and snapshot them into these
//! structs on submit, so all parsing and validation is plain functions.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use market::models::{
    Product, ProductDraft, RecordStatus, Role, Settings, Taxonomy, TaxonomyDraft, User, UserDraft,
    format_specifications, parse_lines, parse_specifications, slugify,
};

use crate::pages::login::INVALID_EMAIL;
use crate::pages::register::MIN_PASSWORD_LEN;

fn required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_owned()).filter(|v| !v.is_empty())
}

fn email(value: &str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.contains('@') { Ok(value.to_owned()) } else { Err(INVALID_EMAIL) }
}

fn amount(value: &str, message: &'static str) -> Result<f64, &'static str> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).ok_or(message)
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub is_admin: bool,
    pub password: String,
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            role: user.role.as_str().to_owned(),
            is_admin: user.is_admin,
            password: String::new(),
        }
    }
}

impl UserForm {
    /// A password is required when creating; when editing a blank password
    /// leaves the current one unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field's message.
    pub fn to_draft(&self, creating: bool) -> Result<UserDraft, &'static str> {
        let name = required(&self.name, "Name is required.")?;
        let email = email(&self.email)?;
        let role = Role::parse(&self.role).unwrap_or_default();
        let password = match optional(&self.password) {
            None if creating => return Err("Password must be at least 6 characters."),
            None => None,
            Some(p) if p.chars().count() < MIN_PASSWORD_LEN => {
                return Err("Password must be at least 6 characters.");
            }
            Some(p) => Some(p),
        };
        Ok(UserDraft { name, email, phone: optional(&self.phone), role, is_admin: self.is_admin, password })
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    /// One image URL per line.
    pub images: String,
    /// One feature per line.
    pub features: String,
    /// `key: value` per line.
    pub specifications: String,
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.as_ref().map(|c| c.id.clone()).unwrap_or_default(),
            images: product.images.join("\n"),
            features: product.features.join("\n"),
            specifications: format_specifications(&product.specifications),
        }
    }
}

impl ProductForm {
    /// # Errors
    ///
    /// Returns the first invalid field's message.
    pub fn to_draft(&self) -> Result<ProductDraft, &'static str> {
        let name = required(&self.name, "Name is required.")?;
        let price = amount(&self.price, "Enter a valid price.")?;
        let stock = if self.stock.trim().is_empty() {
            0
        } else {
            self.stock.trim().parse::<u32>().map_err(|_| "Stock must be a whole number.")?
        };
        Ok(ProductDraft {
            name,
            description: self.description.trim().to_owned(),
            price,
            stock,
            category: optional(&self.category),
            images: parse_lines(&self.images),
            features: parse_lines(&self.features),
            specifications: parse_specifications(&self.specifications),
        })
    }
}

// =============================================================================
// TAXONOMY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxonomyForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent: String,
    pub active: bool,
}

impl Default for TaxonomyForm {
    fn default() -> Self {
        Self { name: String::new(), slug: String::new(), description: String::new(), parent: String::new(), active: true }
    }
}

impl From<&Taxonomy> for TaxonomyForm {
    fn from(record: &Taxonomy) -> Self {
        let draft = TaxonomyDraft::from(record);
        Self {
            name: draft.name,
            slug: draft.slug,
            description: draft.description,
            parent: draft.parent.unwrap_or_default(),
            active: draft.status == RecordStatus::Active,
        }
    }
}

impl TaxonomyForm {
    /// A blank slug is derived from the name.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field's message.
    pub fn to_draft(&self) -> Result<TaxonomyDraft, &'static str> {
        let name = required(&self.name, "Name is required.")?;
        let slug = optional(&self.slug).map_or_else(|| slugify(&name), |s| slugify(&s));
        Ok(TaxonomyDraft {
            name,
            slug,
            description: self.description.trim().to_owned(),
            parent: optional(&self.parent),
            status: if self.active { RecordStatus::Active } else { RecordStatus::Inactive },
        })
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub site_name: String,
    pub contact_email: String,
    pub shipping_fee: String,
    /// Percent, e.g. `8` or `8.25`.
    pub tax_percent: String,
    /// Blank disables free shipping.
    pub free_shipping_threshold: String,
}

impl From<&Settings> for SettingsForm {
    fn from(settings: &Settings) -> Self {
        Self {
            site_name: settings.site_name.clone(),
            contact_email: settings.contact_email.clone(),
            shipping_fee: settings.shipping_fee.to_string(),
            tax_percent: format_percent(settings.tax_rate),
            free_shipping_threshold: settings.free_shipping_threshold.map(|t| t.to_string()).unwrap_or_default(),
        }
    }
}

fn format_percent(rate: f64) -> String {
    let percent = (rate * 10_000.0).round() / 100.0;
    percent.to_string()
}

impl SettingsForm {
    /// # Errors
    ///
    /// Returns the first invalid field's message.
    pub fn to_settings(&self) -> Result<Settings, &'static str> {
        let site_name = required(&self.site_name, "Site name is required.")?;
        let contact_email = email(&self.contact_email)?;
        let shipping_fee = amount(&self.shipping_fee, "Enter a valid shipping fee.")?;
        let tax_percent = amount(&self.tax_percent, "Tax rate must be between 0 and 100.")?;
        if tax_percent > 100.0 {
            return Err("Tax rate must be between 0 and 100.");
        }
        let free_shipping_threshold = match optional(&self.free_shipping_threshold) {
            None => None,
            Some(raw) => Some(amount(&raw, "Enter a valid free-shipping threshold.")?),
        };
        Ok(Settings {
            site_name,
            contact_email,
            shipping_fee,
            tax_rate: tax_percent / 100.0,
            free_shipping_threshold,
        })
    }
}
