use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use rusty_rax::args::{self, CleanArgs};
use rusty_rax::controller::score::{
    fighter_page, get_data_for_leaderboard, get_fighter_detail, leaderboard_page,
};
use rusty_rax::output::{write_fighter_detail, write_leaderboard};

fn print_once(args: &CleanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(name) = &args.fighter {
        let detail = get_fighter_detail(args, name)?;
        write_fighter_detail(&mut out, &detail, args.format)?;
    } else {
        let data = get_data_for_leaderboard(args, chrono::Utc::now())?;
        write_leaderboard(&mut out, &data, args.format)?;
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let Some(addr) = args.serve else {
        return print_once(&args);
    };

    log::info!("serving leaderboard for {} on http://{addr}", args.input.display());
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(args.clone()))
            .route("/", web::get().to(leaderboard_page))
            .route("/fighter", web::get().to(fighter_page))
            .route("/health", web::get().to(HttpResponse::Ok))
    })
    .bind(addr)?
    .run()
    .await?;
    Ok(())
}
