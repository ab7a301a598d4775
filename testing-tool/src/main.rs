use anyhow::{anyhow, bail, Result};
use colored::*;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🗺️ Zonas y Rutas Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    // Paso 1: Pedir la URL del servidor
    let base_url = get_base_url()?;
    let api = Api {
        client: Client::new(),
        base_url,
    };

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📍 Escenario de zona (crear, consultar, eliminar)");
        println!("2. 🛣️ Escenario de rutas por zona");
        println!("3. 📄 Listar zonas y rutas");
        println!("4. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-4): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;

        let result = match choice.trim() {
            "1" => zona_scenario(&api).await,
            "2" => rutas_scenario(&api).await,
            "3" => list_all(&api).await,
            "4" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                continue;
            }
        };

        match result {
            Ok(()) => println!("{}", "✅ Escenario completado".bright_green().bold()),
            Err(e) => println!("{} {}", "❌ Escenario fallido:".bright_red().bold(), e),
        }
    }

    Ok(())
}

fn get_base_url() -> Result<String> {
    print!("{}", "URL del servidor [http://localhost:3000]: ".bright_yellow());
    io::stdout().flush()?;
    let mut url = String::new();
    io::stdin().read_line(&mut url)?;
    let url = url.trim().trim_end_matches('/');

    Ok(if url.is_empty() {
        "http://localhost:3000".to_string()
    } else {
        url.to_string()
    })
}

struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    async fn call(&self, method: Method, path: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
        let url = format!("{}{}", self.base_url, path);
        println!("{} {} {}", "📤".bright_blue(), method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        println!("{} {}", "📥".bright_green(), status);
        println!("{}", serde_json::to_string_pretty(&body)?);
        Ok((status, body))
    }
}

fn expect_status(actual: StatusCode, expected: StatusCode) -> Result<()> {
    if actual != expected {
        bail!("se esperaba {}, se obtuvo {}", expected, actual);
    }
    Ok(())
}

fn field<'a>(body: &'a Value, name: &str) -> Result<&'a str> {
    body.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("la respuesta no contiene '{}'", name))
}

async fn zona_scenario(api: &Api) -> Result<()> {
    println!();
    println!("{}", "📍 ESCENARIO DE ZONA".bright_cyan().bold());

    let (status, body) = api
        .call(Method::POST, "/nueva-zona", Some(json!({ "nombre_zona": "Centro", "estado": "CDMX" })))
        .await?;
    expect_status(status, StatusCode::CREATED)?;
    let id_zona = field(&body, "id_zona")?.to_string();

    let (status, zona) = api.call(Method::GET, &format!("/zona/{}", id_zona), None).await?;
    expect_status(status, StatusCode::OK)?;
    if zona["municipios_incluidos"] != json!([]) || zona["codigos_postales_relacionados"] != json!([]) {
        bail!("las listas omitidas deberían guardarse vacías");
    }

    let (status, _) = api.call(Method::DELETE, &format!("/eliminar-zona/{}", id_zona), None).await?;
    expect_status(status, StatusCode::OK)?;

    let (status, _) = api.call(Method::GET, &format!("/zona/{}", id_zona), None).await?;
    expect_status(status, StatusCode::NOT_FOUND)
}

async fn rutas_scenario(api: &Api) -> Result<()> {
    println!();
    println!("{}", "🛣️ ESCENARIO DE RUTAS POR ZONA".bright_cyan().bold());

    let zonas = ["me101", "me101", "me202"];
    let mut creadas = Vec::new();
    for (n, zona) in zonas.iter().enumerate() {
        let (status, body) = api
            .call(
                Method::POST,
                "/nueva-ruta",
                Some(json!({
                    "nombre_ruta": format!("Ruta de prueba {}", n + 1),
                    "id_zona_asociada": zona,
                    "ubicaciones": [{
                        "descripcion_punto": "Punto de partida",
                        "coordenadas": { "latitud": 19.4326, "longitud": -99.1332 }
                    }]
                })),
            )
            .await?;
        expect_status(status, StatusCode::CREATED)?;
        creadas.push(field(&body, "id_ruta")?.to_string());
    }

    let (status, body) = api.call(Method::GET, "/rutas-por-zona/me101", None).await?;
    expect_status(status, StatusCode::OK)?;
    let encontradas: Vec<&str> = body
        .as_array()
        .map(|rutas| rutas.iter().filter_map(|r| r["id_ruta"].as_str()).collect())
        .unwrap_or_default();
    for id_ruta in &creadas[..2] {
        if !encontradas.contains(&id_ruta.as_str()) {
            bail!("la ruta {} no aparece en su zona", id_ruta);
        }
    }

    // Limpiar
    for id_ruta in &creadas {
        let (status, _) = api.call(Method::DELETE, &format!("/eliminar-ruta/{}", id_ruta), None).await?;
        expect_status(status, StatusCode::OK)?;
    }
    Ok(())
}

async fn list_all(api: &Api) -> Result<()> {
    let (status, _) = api.call(Method::GET, "/zonas", None).await?;
    expect_status(status, StatusCode::OK)?;
    let (status, _) = api.call(Method::GET, "/rutas", None).await?;
    expect_status(status, StatusCode::OK)
}
