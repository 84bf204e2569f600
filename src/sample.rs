//! Built-in reference documents.
//!
//! A short excerpt pair from the Constitution of Japan and the 2012
//! amendment draft, the document pair this viewer was built around. The
//! CLI compares them under `--sample`; they double as a realistic CJK
//! corpus for the renderer tests.

/// Display label for the sample comparison.
pub const LABEL: &str = "constitution.md";

/// Excerpts from the current constitution (the old side).
pub const CURRENT_CONSTITUTION: &str = "\
# 日本国憲法

## 前文（抜粋）

日本国民は、正当に選挙された国会における代表者を通じて行動し、
われらとわれらの子孫のために、諸国民との協和による成果と、
わが国全土にわたつて自由のもたらす恵沢を確保し、
政府の行為によつて再び戦争の惨禍が起ることのないやうにすることを決意し、
ここに主権が国民に存することを宣言し、この憲法を確定する。

## 第二章　戦争の放棄

### 第九条

日本国民は、正義と秩序を基調とする国際平和を誠実に希求し、
国権の発動たる戦争と、武力による威嚇又は武力の行使は、
国際紛争を解決する手段としては、永久にこれを放棄する。

前項の目的を達するため、陸海空軍その他の戦力は、これを保持しない。
国の交戦権は、これを認めない。
";

/// Excerpts from the amendment draft (the new side).
pub const AMENDMENT_DRAFT: &str = "\
# 日本国憲法改正草案

## 前文（抜粋）

日本国は、長い歴史と固有の文化を持ち、
国民統合の象徴である天皇を戴く国家であって、
国民主権の下、立法、行政及び司法の三権分立に基づいて統治される。

## 第二章　安全保障

### 第九条

日本国民は、正義と秩序を基調とする国際平和を誠実に希求し、
国権の発動としての戦争を放棄し、
武力による威嚇及び武力の行使は、
国際紛争を解決する手段としては用いない。

前項の規定は、自衛権の発動を妨げるものではない。

### 第九条の二

我が国の平和と独立並びに国及び国民の安全を確保するため、
内閣総理大臣を最高指揮官とする国防軍を保持する。
";
