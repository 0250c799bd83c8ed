//! Normalización de texto para matching
//!
//! El tipo de mantenimiento es texto libre; para detectar una troca de óleo
//! hay que comparar ignorando mayúsculas y acentos ("Óleo", "oleo", "ÓLEO").

/// Normaliza un texto libre para matching robusto: minúsculas + acentos
/// portugueses plegados a su forma sin diacrítico.
pub fn normalizar(texto: &str) -> String {
    texto
        .to_lowercase()
        // Normalizar acentos portugueses
        .replace(['á', 'à', 'â', 'ã'], "a")
        .replace(['é', 'ê'], "e")
        .replace('í', "i")
        .replace(['ó', 'ô', 'õ'], "o")
        .replace(['ú', 'ü'], "u")
        .replace('ç', "c")
}

/// Indica si un tipo de mantenimiento corresponde a una troca de óleo.
/// Match por substring, igual que el comportamiento original.
pub fn es_troca_de_oleo(tipo_manutencao: &str) -> bool {
    normalizar(tipo_manutencao).contains("oleo")
}
