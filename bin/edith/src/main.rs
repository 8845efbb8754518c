mod cli;
mod error;

use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use campus::{ClassScheduleCreate, ClassroomCreate};
use campus_client::Client;

use cli::{
    classroom_filter, schedule_filter, Cli, ClassroomCommand, Commands, OccupancyCommand,
    ScheduleCommand,
};
use error::Error;

type ErasedError = Box<dyn std::error::Error + Send + Sync + 'static>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    let cli = Cli::parse();
    debug!("edith version {VERSION}");

    let client = Client::new(&cli.api_url)?;

    match cli.command {
        Commands::Health => print(&client.health().await?)?,
        Commands::LoginUrl => println!("{}", client.login_url().await?),
        Commands::Occupancy(command) => occupancy(&client, command).await?,
        Commands::Classrooms(command) => classrooms(&client, command).await?,
        Commands::Schedules(command) => schedules(&client, command).await?,
    }

    Ok(())
}

async fn occupancy(client: &Client, command: OccupancyCommand) -> Result<(), Error> {
    match command {
        OccupancyCommand::List {
            faculty,
            building,
            available_only,
        } => {
            let readings = client
                .occupancy(faculty.as_deref(), building.as_deref(), available_only)
                .await?;
            print(&readings)
        }
        OccupancyCommand::Show { classroom_id } => {
            print(&client.classroom_occupancy(&classroom_id).await?)
        }
    }
}

async fn classrooms(client: &Client, command: ClassroomCommand) -> Result<(), Error> {
    match command {
        ClassroomCommand::List {
            faculty,
            building,
            floor,
        } => {
            let filter = classroom_filter(faculty, building, floor);
            print(&client.classrooms(&filter).await?)
        }
        ClassroomCommand::Show { id } => print(&client.classroom(&id).await?),
        ClassroomCommand::Create(args) => {
            let classroom = ClassroomCreate::try_from(args)?;
            let created = client.create_classroom(&classroom).await?;
            info!("created classroom {}", created.id);
            print(&created)
        }
        ClassroomCommand::Update(args) => {
            let (id, update) = args.into_update()?;
            print(&client.update_classroom(&id, &update).await?)
        }
        ClassroomCommand::Delete { id } => {
            let message = client.delete_classroom(&id).await?;
            info!("deleted classroom {}", id);
            print(&message)
        }
    }
}

async fn schedules(client: &Client, command: ScheduleCommand) -> Result<(), Error> {
    match command {
        ScheduleCommand::List {
            classroom,
            day,
            period,
        } => {
            let filter = schedule_filter(classroom, day, period);
            print(&client.schedules(&filter).await?)
        }
        ScheduleCommand::Active { at } => print(&client.active_schedules(at).await?),
        ScheduleCommand::Show { id } => print(&client.schedule(&id).await?),
        ScheduleCommand::Create(args) => {
            let schedule = ClassScheduleCreate::from(args);
            let created = client.create_schedule(&schedule).await?;
            info!("created schedule {}", created.id);
            print(&created)
        }
        ScheduleCommand::Update(args) => {
            let (id, update) = args.into_update()?;
            print(&client.update_schedule(&id, &update).await?)
        }
        ScheduleCommand::Delete { id } => {
            let message = client.delete_schedule(&id).await?;
            info!("deleted schedule {}", id);
            print(&message)
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
