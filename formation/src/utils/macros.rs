// FICHIER : formation/src/utils/macros.rs

/// Affiche une info à l'utilisateur et logue l'événement
#[macro_export]
macro_rules! user_info {
    ($key:expr) => {{
        println!("{}", $key);
        tracing::info!(event = "user_notification", key = $key);
    }};
    ($key:expr, $($arg:tt)*) => {{
        let full_msg = format!($($arg)*);
        println!("{}", full_msg);
        tracing::info!(event = "user_notification", key = $key, message = %full_msg);
    }};
}

/// Affiche un succès (vert) à l'utilisateur
#[macro_export]
macro_rules! user_success {
    ($key:expr) => {{
        println!("✅ {}", $key);
        tracing::info!(event = "user_success", key = $key);
    }};
    ($key:expr, $($arg:tt)*) => {{
        let full_msg = format!($($arg)*);
        println!("✅ {}", full_msg);
        tracing::info!(event = "user_success", key = $key, message = %full_msg);
    }};
}

/// Affiche une erreur à l'utilisateur ET logue la structure technique
#[macro_export]
macro_rules! user_error {
    ($key:expr) => {{
        eprintln!("❌ {}", $key);
        tracing::error!(event = "user_error", key = $key);
    }};
    ($key:expr, $($arg:tt)*) => {{
        let full_msg = format!($($arg)*);
        eprintln!("❌ {}", full_msg);
        tracing::error!(event = "user_error", key = $key, message = %full_msg);
    }};
}

#[cfg(test)]
mod tests {
    use crate::utils::error::AppError;

    #[test]
    fn test_macros_accept_formatted_arguments() {
        let err = AppError::Config("Dossier de build absent".to_string());

        user_info!("EXPORT_START", "Module : {}", "etape-02");
        user_success!("EXPORT_OK", "Archive générée ({} fichiers)", 3);
        user_error!("EXPORT_FAIL", "{}", err);
    }
}
