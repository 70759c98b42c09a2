use chrono::NaiveDate;

/// Fecha corta estilo `toLocaleDateString` en-US: 1/15/2024
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Tamaño en MB con dos decimales
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0 / 1024.0)
}

/// Clase de color del score de confianza en las cards
pub fn confidence_class(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "text-success",
        70..=89 => "text-warning",
        _ => "text-destructive",
    }
}

/// Variante del badge de confianza en el detalle
pub fn confidence_variant(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "badge-default",
        70..=89 => "badge-secondary",
        _ => "badge-destructive",
    }
}
