/// The player card markup, kept byte-compatible with the cards the region has
/// been printing. The swapped `</tr></td>` closing pair and the `</img>` closing
/// tag are part of that contract; browsers tolerate both.
pub const PLAYER_CARD: &str = r#"<table style="font-family:courier; text-align:right;" border=1 cellspacing=0 cellpadding=10>
<tr><td>
<table border=0 cellspacing=0 cellpadding=0>
<col width=220>
<tr>
<td style="color:red;" colspan=2 align="center">
AYSO Region 2 Player ID Card
</td>
</tr>
<tr>
<td>
  <table style="font-size:70%;">
  <tr><td>Name:</td><td>{{ name }}</td></tr>
  <tr><td>AYSO ID:</td><td>{{ ayso_id }}</td></tr>
  <tr><td>DOB:</td><td>{{ dob }}</td></tr>
  <tr><td>S-A-R:</td><td>{{ sar }}</td></tr>
  <tr><td>Year-Div:</td><td>{{ my }}-{{ division }}</td></tr>
  <tr><td>Program:</td><td style="color:red;">{{ program }}</td></tr>
  <tr><td height=25>RC Sig:</td><td></td></tr>
  </table>
</td>
<td>
<img style="max-width:100px; max-height:120px;" src="{{ image }}"></img>
</td>
</tr>
</table>
</tr></td>
</table>
"#;

/// The volunteer card: same chrome as the player card, volunteer fields inside.
pub const VOLUNTEER_CARD: &str = r#"<table style="font-family:courier; text-align:right;" border=1 cellspacing=0 cellpadding=10>
<tr><td>
<table border=0 cellspacing=0 cellpadding=0>
<col width=220>
<tr>
<td style="color:red;" colspan=2 align="center">
AYSO Region 2 Volunteer ID Card
</td>
</tr>
<tr>
<td>
  <table style="font-size:70%;">
  <tr><td>Name:</td><td>{{ name }}</td></tr>
  <tr><td>AYSO ID:</td><td>{{ ayso_id }}</td></tr>
  <tr><td>MY:</td><td>{{ my }}</td></tr>
  <tr><td>Certs:</td><td>{{ certs }}</td></tr>
  <tr><td>Safe Haven:</td><td>{{ sh }}</td></tr>
  <tr><td>CDC:</td><td>{{ cdc }}</td></tr>
  <tr><td height=25>RC Sig:</td><td></td></tr>
  </table>
</td>
<td>
<img style="max-width:100px; max-height:120px;" src="{{ image }}"></img>
</td>
</tr>
</table>
</tr></td>
</table>
"#;
