use crate::error::Error;
use crate::error::Hint;
use crate::util::anyerror::Fault;
use std::path::PathBuf;

/// Required marker at the front of every trigger menu directory name.
pub const MENU_PREFIX: &str = "L1Menu_";

const VHDL_DIR: &str = "vhdl";
const MODULE_PREFIX: &str = "module_";

/// Formats the canonical directory name for a module index, eg. `module_0`.
pub fn module_name(index: usize) -> String {
    format!("{}{}", MODULE_PREFIX, index)
}

/// A trigger menu: the read-only input directory describing the set of logic
/// modules to build.
///
/// Generated VHDL snippets live per module under `<menu>/vhdl/module_<i>/src`.
#[derive(Debug, PartialEq)]
pub struct Menu {
    root: PathBuf,
    name: String,
}

impl Menu {
    /// Accepts an existing directory carrying the menu name prefix.
    pub fn load(root: PathBuf) -> Result<Self, Error> {
        if root.is_dir() == false {
            return Err(Error::MenuDirMissing(root));
        }
        let name = match root.file_name().and_then(|o| o.to_str()) {
            Some(n) => n.to_string(),
            None => return Err(Error::MissingFileSystemPathName(root)),
        };
        if name.starts_with(MENU_PREFIX) == false {
            return Err(Error::InvalidMenuName(name, Hint::MenuPrefix));
        }
        Ok(Self { root: root, name: name })
    }

    pub fn get_root(&self) -> &PathBuf {
        &self.root
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Counts the `module_<i>` subdirectories beneath the menu's vhdl folder.
    pub fn count_modules(&self) -> Result<usize, Fault> {
        let vhdl = self.root.join(VHDL_DIR);
        if vhdl.is_dir() == false {
            return Ok(0);
        }
        let mut count = 0;
        for entry in std::fs::read_dir(&vhdl)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() == false {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if let Some(index) = name.strip_prefix(MODULE_PREFIX) {
                    if index.parse::<usize>().is_ok() == true {
                        count += 1;
                    }
                }
            }
        }
        Ok(count)
    }

    /// Path to the generated VHDL sources for module `index` within the menu.
    pub fn module_src(&self, index: usize) -> PathBuf {
        self.root.join(VHDL_DIR).join(module_name(index)).join("src")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_menu(root: &std::path::Path, name: &str, modules: usize) -> PathBuf {
        let menu = root.join(name);
        for i in 0..modules {
            std::fs::create_dir_all(menu.join(VHDL_DIR).join(module_name(i)).join("src")).unwrap();
        }
        if modules == 0 {
            std::fs::create_dir_all(&menu).unwrap();
        }
        menu
    }

    #[test]
    fn counts_exactly_the_module_directories() {
        let scratch = tempfile::tempdir().unwrap();
        let menu = Menu::load(make_menu(scratch.path(), "L1Menu_Test", 3)).unwrap();
        assert_eq!(menu.get_name(), "L1Menu_Test");
        assert_eq!(menu.count_modules().unwrap(), 3);
    }

    #[test]
    fn empty_menu_counts_zero() {
        let scratch = tempfile::tempdir().unwrap();
        let menu = Menu::load(make_menu(scratch.path(), "L1Menu_Empty", 0)).unwrap();
        assert_eq!(menu.count_modules().unwrap(), 0);
    }

    #[test]
    fn stray_directories_are_not_modules() {
        let scratch = tempfile::tempdir().unwrap();
        let root = make_menu(scratch.path(), "L1Menu_Mix", 2);
        std::fs::create_dir_all(root.join(VHDL_DIR).join("module_x")).unwrap();
        std::fs::create_dir_all(root.join(VHDL_DIR).join("testvectors")).unwrap();
        let menu = Menu::load(root).unwrap();
        assert_eq!(menu.count_modules().unwrap(), 2);
    }

    #[test]
    fn rejects_missing_prefix() {
        let scratch = tempfile::tempdir().unwrap();
        let root = make_menu(scratch.path(), "Foo", 1);
        match Menu::load(root) {
            Err(Error::InvalidMenuName(name, _)) => assert_eq!(name, "Foo"),
            other => panic!("expected invalid menu name, got {:?}", other),
        }
    }

    #[test]
    fn rejects_missing_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let ghost = scratch.path().join("L1Menu_Ghost");
        assert_eq!(Menu::load(ghost.clone()), Err(Error::MenuDirMissing(ghost)));
    }

    #[test]
    fn module_sources_are_disjoint() {
        let scratch = tempfile::tempdir().unwrap();
        let menu = Menu::load(make_menu(scratch.path(), "L1Menu_Test", 2)).unwrap();
        assert_ne!(menu.module_src(0), menu.module_src(1));
    }
}
