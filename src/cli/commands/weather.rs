use crate::cli::parser::{Commands, WeatherCommand};
use crate::config::Config;
use crate::core::display::unit_symbol;
use crate::core::validation::validate_city;
use crate::core::weather::WeatherLogic;
use crate::errors::AppResult;
use crate::service::openweather::OpenWeatherClient;
use crate::ui::messages::{info, success};
use crate::ui::render;
use std::future::Future;

fn block_on<F: Future>(fut: F) -> AppResult<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(fut))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Weather { action } = cmd else {
        return Ok(());
    };
    let mut logic = WeatherLogic::open(&cfg.data_path(), cfg.history_limit);

    match action {
        WeatherCommand::Search { city } => {
            // bad input is reported before the API key is required
            validate_city(city)?;
            let client = OpenWeatherClient::new(&cfg.weather)?;
            let outcome = block_on(logic.search(&client, city))??;
            print!("{}", render::weather_card(&outcome));
        }

        WeatherCommand::Refresh => {
            logic.current_city()?;
            let client = OpenWeatherClient::new(&cfg.weather)?;
            let outcome = block_on(logic.refresh(&client))??;
            print!("{}", render::weather_card(&outcome));
        }

        WeatherCommand::History { remove, clear } => {
            if let Some(city) = remove {
                if logic.history.remove(city) {
                    success(format!("Removed '{city}' from recent searches."));
                } else {
                    info(format!("'{city}' is not in recent searches."));
                }
            } else if *clear {
                logic.history.clear();
                success("Recent searches cleared.");
            }
            print!("{}", render::history_list(logic.history.list()));
        }

        WeatherCommand::Fav {
            add,
            remove,
            toggle,
        } => {
            if let Some(city) = add {
                if logic.favorites.add(city) {
                    success(format!("★ '{city}' added to favorites."));
                } else {
                    info(format!("'{city}' is already a favorite."));
                }
            } else if let Some(city) = remove {
                if logic.favorites.remove(city) {
                    success(format!("'{city}' removed from favorites."));
                } else {
                    info(format!("'{city}' is not a favorite."));
                }
            } else if *toggle {
                let (city, now) = logic.toggle_current_favorite()?;
                if now {
                    success(format!("★ '{city}' added to favorites."));
                } else {
                    success(format!("'{city}' removed from favorites."));
                }
            }
            print!("{}", render::favorites_list(logic.favorites.list()));
        }

        WeatherCommand::Unit {
            celsius,
            fahrenheit,
            toggle,
        } => {
            if *celsius {
                logic.prefs.set_fahrenheit(false);
            } else if *fahrenheit {
                logic.prefs.set_fahrenheit(true);
            } else if *toggle {
                logic.prefs.toggle_unit();
            }

            let f = logic.prefs.use_fahrenheit();
            let name = if f { "Fahrenheit" } else { "Celsius" };
            info(format!("Temperature unit: {} ({name})", unit_symbol(f)));
        }
    }

    Ok(())
}
