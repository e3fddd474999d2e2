//! # Headers HTTP
//! src/http/headers.rs
//!
//! Multi-mapa ordenado de headers. Un mismo nombre puede aparecer varias
//! veces y cada valor se conserva en el orden en que llegó.
//!
//! Los nombres se comparan de forma case-sensitive: `Host` y `host` son
//! entradas distintas.

/// Colección ordenada de headers (nombre → valores)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    /// Entradas en orden de primera aparición del nombre
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    /// Crea una colección vacía
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un valor al header `name`
    ///
    /// Nunca sobrescribe: si el nombre ya existe, el valor se agrega al final.
    ///
    /// # Ejemplo
    /// ```
    /// use httpd::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.add("Accept", "text/html");
    /// headers.add("Accept", "text/plain");
    ///
    /// assert_eq!(headers.get("Accept"), Some("text/html"));
    /// assert_eq!(headers.get_all("Accept"), ["text/html", "text/plain"]);
    /// ```
    pub fn add(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .entries
                .push((name.to_string(), vec![value.to_string()])),
        }
    }

    /// Retorna el primer valor agregado para `name`, o `None` si no existe
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Retorna todos los valores de `name` en orden de llegada
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Indica si existe al menos un valor para `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Itera sobre (nombre, valores) en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Cantidad de nombres distintos
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` si no se agregó ningún header
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
