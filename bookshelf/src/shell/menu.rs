use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::proxy::BookProxy;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuOption {
    Add,
    Remove,
    Update,
    Get,
    List,
    ListFiltered,
    Exit,
}

impl MenuOption {
    pub fn parse(line: &str) -> Option<MenuOption> {
        match line.trim().parse::<u8>().ok()? {
            1 => Some(MenuOption::Add),
            2 => Some(MenuOption::Remove),
            3 => Some(MenuOption::Update),
            4 => Some(MenuOption::Get),
            5 => Some(MenuOption::List),
            6 => Some(MenuOption::ListFiltered),
            7 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "
******* MAIN MENU *******
1. Add a book
2. Remove a book by id
3. Update a book by id
4. Get a book by id
5. List all books
6. List books filtered by title
7. Exit
Enter option: ";

pub fn format_book(book: &BookDto) -> String {
    format!("[{}] {} | {} | {}", book.id, book.title, book.publisher, book.note)
}

// Shell reads menu choices line by line and turns each one into a proxy call.
// End of input behaves like the exit option.
pub struct Shell<R, W> {
    proxy: Arc<dyn BookProxy>,
    lines: Lines<R>,
    output: W,
}

impl<R: AsyncBufRead + Unpin, W: Write> Shell<R, W> {
    pub fn new(proxy: Arc<dyn BookProxy>, input: R, output: W) -> Self {
        Self {
            proxy,
            lines: input.lines(),
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;
            let line = match self.lines.next_line().await? {
                Some(line) => line,
                None => break,
            };
            match MenuOption::parse(&line) {
                Some(MenuOption::Exit) => break,
                Some(option) => self.dispatch(option).await?,
                None => writeln!(self.output, "Invalid option, enter a number from 1 to 7.")?,
            }
        }
        writeln!(self.output, "Stopping the catalog shell")?;
        Ok(())
    }

    async fn dispatch(&mut self, option: MenuOption) -> LibraryResult<()> {
        match option {
            MenuOption::Add => self.add_book().await,
            MenuOption::Remove => self.remove_book().await,
            MenuOption::Update => self.update_book().await,
            MenuOption::Get => self.get_book().await,
            MenuOption::List => self.list_books().await,
            MenuOption::ListFiltered => self.list_books_filtered().await,
            MenuOption::Exit => Ok(()),
        }
    }

    async fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        writeln!(self.output, "Enter {}: ", label)?;
        self.output.flush()?;
        Ok(self.lines.next_line().await?)
    }

    async fn prompt_id(&mut self) -> LibraryResult<Option<i64>> {
        match self.prompt("id").await? {
            Some(line) => match line.trim().parse::<i64>() {
                Ok(id) => Ok(Some(id)),
                Err(_) => {
                    writeln!(self.output, "Invalid id {:?}, expected an integer.", line.trim())?;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn prompt_book(&mut self) -> LibraryResult<Option<BookDto>> {
        let id = match self.prompt_id().await? {
            Some(id) => id,
            None => return Ok(None),
        };
        let title = self.prompt("title").await?.unwrap_or_default();
        let publisher = self.prompt("publisher").await?.unwrap_or_default();
        let note = self.prompt("note").await?.unwrap_or_default();
        Ok(Some(BookDto::new(id, title.as_str(), publisher.as_str(), note.as_str())))
    }

    async fn add_book(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "*********** ADD BOOK ***************")?;
        if let Some(book) = self.prompt_book().await? {
            match self.proxy.add_book(&book).await {
                Ok(added) => writeln!(self.output, "Book added: {}", format_book(&added))?,
                Err(err) => writeln!(self.output, "Book not added: {}", err)?,
            }
        }
        Ok(())
    }

    async fn remove_book(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "********** REMOVE BOOK **************")?;
        if let Some(id) = self.prompt_id().await? {
            let res = self.proxy.remove_book(id).await;
            writeln!(self.output, "Book with id {} removed? {}", id, res.is_ok())?;
            if let Err(err) = res {
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(())
    }

    async fn update_book(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "********* UPDATE BOOK *************")?;
        if let Some(book) = self.prompt_book().await? {
            let res = self.proxy.update_book(&book).await;
            writeln!(self.output, "Book with id {} updated? {}", book.id, res.is_ok())?;
            if let Err(err) = res {
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(())
    }

    async fn get_book(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "********** GET BOOK BY ID ***************")?;
        if let Some(id) = self.prompt_id().await? {
            match self.proxy.get_book(id).await {
                Ok(book) => writeln!(self.output, "{}", format_book(&book))?,
                Err(err) => writeln!(self.output, "Book not found: {}", err)?,
            }
        }
        Ok(())
    }

    async fn list_books(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "********** LIST BOOKS ***************")?;
        match self.proxy.list_books(None).await {
            Ok(books) => {
                for book in books.iter() {
                    writeln!(self.output, "{}", format_book(book))?;
                }
            }
            Err(err) => writeln!(self.output, "Failed to list books: {}", err)?,
        }
        Ok(())
    }

    async fn list_books_filtered(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "******* LIST BOOKS BY TITLE *******")?;
        let fragment = self.prompt("title filter").await?.unwrap_or_default();
        match self.proxy.list_books(Some(fragment.as_str())).await {
            Ok(books) if books.is_empty() => writeln!(self.output, "No matches found")?,
            Ok(books) => {
                writeln!(self.output, "Matches found:")?;
                for book in books.iter() {
                    writeln!(self.output, "{}", format_book(book))?;
                }
            }
            Err(err) => writeln!(self.output, "Failed to list books: {}", err)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::proxy::factory::create_local_book_proxy;
    use crate::shell::menu::{MenuOption, Shell};

    async fn run_shell(input: &str) -> String {
        let proxy = create_local_book_proxy(&Configuration::new("test"));
        let mut shell = Shell::new(proxy, input.as_bytes(), Vec::new());
        shell.run().await.expect("shell should run");
        String::from_utf8(shell.into_output()).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_parse_menu_options() {
        assert_eq!(Some(MenuOption::Add), MenuOption::parse("1"));
        assert_eq!(Some(MenuOption::ListFiltered), MenuOption::parse(" 6 "));
        assert_eq!(Some(MenuOption::Exit), MenuOption::parse("7"));
        assert_eq!(None, MenuOption::parse("8"));
        assert_eq!(None, MenuOption::parse("abc"));
    }

    #[tokio::test]
    async fn test_should_list_books() {
        let out = run_shell("5\n7\n").await;
        assert!(out.contains("[1] The Adventures of Java | Coding House | A classic in programming"));
        assert!(out.contains("[5] Mastering SQL"));
        assert!(out.contains("Stopping the catalog shell"));
    }

    #[tokio::test]
    async fn test_should_add_and_get_book() {
        let out = run_shell("1\n6\nNew\nP\nN\n4\n6\n7\n").await;
        assert!(out.contains("Book added: [6] New | P | N"));
        assert_eq!(2, out.matches("[6] New | P | N").count());
    }

    #[tokio::test]
    async fn test_should_report_rejected_book() {
        let out = run_shell("1\n1\nAny\nP\nN\n7\n").await;
        assert!(out.contains("Book not added: book 1 not added, id or title already exists"));
    }

    #[tokio::test]
    async fn test_should_update_and_remove_book() {
        let out = run_shell("3\n2\nX\nY\nZ\n2\n2\n2\n2\n7\n").await;
        assert!(out.contains("Book with id 2 updated? true"));
        assert!(out.contains("Book with id 2 removed? true"));
        assert!(out.contains("Book with id 2 removed? false"));
    }

    #[tokio::test]
    async fn test_should_filter_books() {
        let out = run_shell("6\nJAVA\n6\ncobol\n7\n").await;
        assert!(out.contains("Matches found:"));
        assert!(out.contains("[4] The Java Saga"));
        assert!(!out.contains("[3] Code Chronicles"));
        assert!(out.contains("No matches found"));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_input() {
        let out = run_shell("nine\n4\nabc\n").await;
        assert!(out.contains("Invalid option, enter a number from 1 to 7."));
        assert!(out.contains("Invalid id \"abc\", expected an integer."));
        assert!(out.contains("Stopping the catalog shell"));
    }
}
