/// The shelf shown when no list is configured.
pub const RECOMMENDED_EXTENSIONS: [&str; 18] = [
  "formulahendry.auto-close-tag",
  "aaron-bond.better-comments",
  "mikestead.dotenv",
  "EditorConfig.EditorConfig",
  "dbaeumer.vscode-eslint",
  "MikeBovenlander.formate",
  "donjayamanne.githistory",
  "wix.vscode-import-cost",
  "sburg.vscode-javascript-booster",
  "christian-kohler.npm-intellisense",
  "esbenp.prettier-vscode",
  "bradlc.vscode-tailwindcss",
  "Gruntfuggly.todo-tree",
  "ChakrounAnas.turbo-console-log",
  "codeandstuff.package-json-upgrade",
  "moalamri.inline-fold",
  "KnisterPeter.vscode-commitizen",
  "yzhang.markdown-all-in-one"
];

pub fn recommended() -> Vec<String> {
  RECOMMENDED_EXTENSIONS.iter().map(|id| id.to_string()).collect()
}
