use colored::*;
use serde_json::json;
use std::io::{self, Write};
use std::time::Duration;

struct Sesion {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🐕 Pet Walker - Simulador de dispositivo".bright_blue().bold());
    println!("{}", "========================================".bright_blue());
    println!();

    // Paso 1: Configurar sesión (URL del backend + token del paseador)
    let sesion = configurar_sesion()?;

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. ▶️  Iniciar paseo");
        println!("2. 📍 Simular caminata (enviar puntos GPS)");
        println!("3. 🗺️  Ver track y métricas");
        println!("4. 🏁 Finalizar paseo");
        println!("5. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-5): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        let choice = choice.trim();

        match choice {
            "1" => {
                let paseo_id = pedir_paseo_id()?;
                iniciar_paseo(&sesion, &paseo_id).await?;
            }
            "2" => {
                let paseo_id = pedir_paseo_id()?;
                simular_caminata(&sesion, &paseo_id).await?;
            }
            "3" => {
                let paseo_id = pedir_paseo_id()?;
                ver_track(&sesion, &paseo_id).await?;
            }
            "4" => {
                let paseo_id = pedir_paseo_id()?;
                finalizar_paseo(&sesion, &paseo_id).await?;
            }
            "5" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn configurar_sesion() -> Result<Sesion, Box<dyn std::error::Error>> {
    println!("{}", "🔐 CONFIGURACIÓN".bright_cyan().bold());
    println!("{}", "=================".bright_cyan());

    print!("{}", "URL del backend [http://localhost:3000]: ".bright_yellow());
    io::stdout().flush()?;
    let mut base_url = String::new();
    io::stdin().read_line(&mut base_url)?;
    let base_url = match base_url.trim() {
        "" => "http://localhost:3000".to_string(),
        url => url.to_string(),
    };

    print!("{}", "Token JWT del paseador: ".bright_yellow());
    io::stdout().flush()?;
    let mut token = String::new();
    io::stdin().read_line(&mut token)?;
    let token = token.trim().to_string();

    Ok(Sesion {
        base_url,
        token,
        client: reqwest::Client::new(),
    })
}

fn pedir_paseo_id() -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", "ID del paseo: ".bright_yellow());
    io::stdout().flush()?;
    let mut paseo_id = String::new();
    io::stdin().read_line(&mut paseo_id)?;
    Ok(paseo_id.trim().to_string())
}

async fn iniciar_paseo(sesion: &Sesion, paseo_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = format!("{}/api/paseo/{}/iniciar", sesion.base_url, paseo_id);
    let response = sesion
        .client
        .post(&url)
        .bearer_auth(&sesion.token)
        .send()
        .await?;

    mostrar_respuesta(response).await
}

async fn finalizar_paseo(sesion: &Sesion, paseo_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = format!("{}/api/paseo/{}/finalizar", sesion.base_url, paseo_id);
    let response = sesion
        .client
        .post(&url)
        .bearer_auth(&sesion.token)
        .send()
        .await?;

    mostrar_respuesta(response).await
}

/// Caminata sintética: zigzag de pasos de ~8 metros alrededor del punto de
/// partida, una muestra por segundo, igual que muestrearía el teléfono.
async fn simular_caminata(sesion: &Sesion, paseo_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", "Cantidad de puntos [20]: ".bright_yellow());
    io::stdout().flush()?;
    let mut cantidad = String::new();
    io::stdin().read_line(&mut cantidad)?;
    let cantidad: usize = cantidad.trim().parse().unwrap_or(20);

    let mut latitud: f64 = 40.4168;
    let mut longitud: f64 = -3.7038;
    let url = format!("{}/api/gps", sesion.base_url);

    println!();
    println!("{}", "📡 Enviando puntos...".bright_cyan().bold());

    for i in 0..cantidad {
        // ~0.00007° ≈ 8 m; alternar el rumbo para que el track no sea recto
        latitud += 0.00007;
        if i % 2 == 0 {
            longitud += 0.00005;
        } else {
            longitud -= 0.00002;
        }

        let payload = json!({
            "paseoId": paseo_id,
            "latitud": latitud,
            "longitud": longitud,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let response = sesion
            .client
            .post(&url)
            .bearer_auth(&sesion.token)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            println!(
                "  {} punto {}/{} ({:.5}, {:.5})",
                "✅".green(),
                i + 1,
                cantidad,
                latitud,
                longitud
            );
        } else {
            println!(
                "  {} punto {}/{}: {} {}",
                "❌".red(),
                i + 1,
                cantidad,
                response.status(),
                response.text().await.unwrap_or_default()
            );
            break;
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Ok(())
}

async fn ver_track(sesion: &Sesion, paseo_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = format!("{}/api/gps/{}", sesion.base_url, paseo_id);
    let response = sesion
        .client
        .get(&url)
        .bearer_auth(&sesion.token)
        .send()
        .await?;

    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    if status.is_success() {
        println!();
        println!("{}", "🗺️  TRACK DEL PASEO".bright_green().bold());
        println!("{}", "===================".bright_green());
        println!(
            "  Puntos:             {}",
            body["cantidadPuntos"].as_u64().unwrap_or(0)
        );
        println!(
            "  Distancia total:    {:.1} m",
            body["distanciaTotal"].as_f64().unwrap_or(0.0)
        );
        println!(
            "  Velocidad promedio: {:.2} km/h",
            body["velocidadPromedio"].as_f64().unwrap_or(0.0)
        );
    } else {
        println!("{} {}: {}", "❌".red(), status, body);
    }

    Ok(())
}

async fn mostrar_respuesta(response: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        println!("{} {}", "✅".green(), body);
    } else {
        println!("{} {}: {}", "❌".red(), status, body);
    }

    Ok(())
}
