// SPDX-License-Identifier: GPL-3.0-only
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::console::input::parse_int;
use crate::repository::{Notice, RepositoryResult};

const NOT_IN_SYSTEM: &str = "This equipment is not in our system! Please try again.";

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub(super) async fn equipment_menu(&mut self) -> anyhow::Result<()> {
        loop {
            self.println("").await?;
            self.println("=== Equipment Management ===").await?;
            if self.show_tables {
                self.println("Current data:").await?;
                let items = self.repos.equipment.list().await;
                if items.is_empty() {
                    self.println("(no equipment)").await?;
                }
                for item in items {
                    self.println(&format!("{} - {}", item.id, item.name)).await?;
                }
            }

            self.println("").await?;
            self.println("Operations:").await?;
            self.println("1. Add Equipment").await?;
            self.println("2. Rent Equipment").await?;
            self.println("3. Return Equipment").await?;
            self.println("4. Deliver Equipment").await?;
            self.println("5. Pickup Equipment").await?;
            self.println("6. Return to Main menu").await?;

            let op = self.read_line("Enter 1/2/3/4/5/6: ").await?;
            match op.as_str() {
                "1" => self.equipment_add().await?,
                "2" => self.equipment_rent().await?,
                "3" => self.equipment_return().await?,
                "4" => self.equipment_handoff(false).await?,
                "5" => self.equipment_handoff(true).await?,
                "6" => return Ok(()),
                _ => self.input_error(&format!("Unknown operation: {}", op)).await?,
            }
        }
    }

    /// Read an id, printing the abort message when it is not an integer
    async fn read_id(&mut self, prompt: &str, what: &str) -> anyhow::Result<Option<i32>> {
        let value = self.read_line(prompt).await?;
        let id = parse_int(&value);
        if id.is_none() {
            self.input_error(&format!("{} id must be an integer. Exiting...", what))
                .await?;
        }
        Ok(id)
    }

    async fn equipment_add(&mut self) -> anyhow::Result<()> {
        self.println("").await?;
        self.println("=== Equipment Add ===").await?;
        let Some(id) = self.read_id("Please enter a unique equipment id: ", "Equipment").await? else {
            return Ok(());
        };
        let name = self.read_line("Please enter the equipment name: ").await?;
        self.repos.equipment.add(id, name.clone()).await?;
        self.println(&format!("Success! Equipment {} added with id {}.", name, id))
            .await
    }

    async fn equipment_rent(&mut self) -> anyhow::Result<()> {
        self.println("").await?;
        self.println("=== Equipment Rent ===").await?;
        let Some(id) = self.read_id("Please enter a unique equipment id: ", "Equipment").await? else {
            return Ok(());
        };
        match self.repos.equipment.rent(id).await {
            Ok(name) => {
                self.println(&format!("Success! Equipment {} rented with id {}.", name, id))
                    .await
            }
            Err(e) if e.is_not_found() => {
                self.input_error("This id does not correspond with any equipment. Exiting...")
                    .await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn equipment_return(&mut self) -> anyhow::Result<()> {
        self.println("").await?;
        self.println("=== Return Equipment ===").await?;
        let Some(id) = self.read_id("Enter id of the equipment to return: ", "Equipment").await? else {
            return Ok(());
        };
        let result = self.repos.equipment.return_equipment(id).await;
        self.print_notice(result).await
    }

    /// Delivery or pickup, which share the same prompts
    async fn equipment_handoff(&mut self, pickup: bool) -> anyhow::Result<()> {
        let (title, kind) = if pickup {
            ("=== Equipment Pickup ===", "pickup")
        } else {
            ("=== Equipment Delivery ===", "delivery")
        };
        self.println("").await?;
        self.println(title).await?;
        let Some(id) = self.read_id("Please enter the unique equipment id: ", "Equipment").await? else {
            return Ok(());
        };
        let Some(drone_id) = self.read_id("Please enter the drone id: ", "Drone").await? else {
            return Ok(());
        };
        let date = self
            .read_line(&format!("Please enter the {} date (MM/DD/YYYY): ", kind))
            .await?;

        let result = if pickup {
            self.repos.equipment.pickup(id, drone_id, &date).await
        } else {
            self.repos.equipment.deliver(id, drone_id, &date).await
        };
        self.print_notice(result).await
    }

    async fn print_notice(&mut self, result: RepositoryResult<Notice>) -> anyhow::Result<()> {
        match result {
            Ok(notice) => self.println(&notice.to_string()).await?,
            Err(e) if e.is_not_found() => self.println(NOT_IN_SYSTEM).await?,
            Err(e) => return Err(e.into()),
        }
        self.println("Exiting...").await
    }
}
